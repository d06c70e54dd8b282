//! Lazy source
//!
//! Suppresses any notifications a source sends while an
//! observer is being subscribed to it.

// Imports
use {
	crate::{Observer, Source, Subscription},
	core::cell::Cell,
	std::rc::Rc,
};

/// Lazy source
#[derive(Clone, Copy, Default, Debug)]
pub struct Lazy<S> {
	/// Source
	source: S,
}

impl<S> Lazy<S> {
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

impl<S: Source> Source for Lazy<S> {
	type Value = S::Value;

	fn get(&self) -> Self::Value {
		self.source.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		// Only start forwarding once the inner source is done subscribing
		let armed = Rc::new(Cell::new(false));
		let subscription = self.source.subscribe_raw(Observer::new({
			let armed = Rc::clone(&armed);
			move || {
				if armed.get() {
					observer.notify();
				}
			}
		}));
		armed.set(true);

		subscription
	}
}
