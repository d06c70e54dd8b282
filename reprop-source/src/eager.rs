//! Eager source
//!
//! Notifies an observer exactly once while it's being subscribed,
//! regardless of what the underlying source does.

// Imports
use crate::{Lazy, Observer, Source, Subscription};

/// Eager source
#[derive(Clone, Copy, Default, Debug)]
pub struct Eager<S> {
	/// Source
	source: S,
}

impl<S> Eager<S> {
	/// Wraps a source
	#[must_use]
	pub const fn new(source: S) -> Self {
		Self { source }
	}

	/// Returns the inner source
	#[must_use]
	pub fn into_inner(self) -> S {
		self.source
	}
}

impl<S: Source> Source for Eager<S> {
	type Value = S::Value;

	fn get(&self) -> Self::Value {
		self.source.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		observer.notify();
		Lazy::new(&self.source).subscribe_raw(observer)
	}
}
