//! Constant source

// Imports
use crate::{Observer, Source, Subscription};

/// Constant source.
///
/// Always returns the same value and never notifies.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, Debug)]
pub struct Constant<T> {
	/// Value
	value: T,
}

impl<T> Constant<T> {
	/// Creates a new constant source
	#[must_use]
	pub const fn new(value: T) -> Self {
		Self { value }
	}

	/// Returns the inner value
	#[must_use]
	pub fn into_inner(self) -> T {
		self.value
	}
}

impl<T: Clone> Source for Constant<T> {
	type Value = T;

	fn get(&self) -> Self::Value {
		self.value.clone()
	}

	fn subscribe_raw(&self, _observer: Observer) -> Subscription {
		Subscription::empty()
	}
}

/// Creates a constant source
#[must_use]
pub const fn constant<T>(value: T) -> Constant<T> {
	Constant::new(value)
}
