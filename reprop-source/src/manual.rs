//! Manual source
//!
//! A source holding its own value, that only notifies
//! its observers when explicitly told to.

// Imports
use {
	crate::{Notifier, Observer, Source, Subscription},
	core::{cell::RefCell, fmt, mem},
	std::rc::Rc,
};

/// Inner
struct Inner<T> {
	/// Value
	value: RefCell<T>,

	/// Notifier
	notifier: Notifier,
}

/// Manual source
pub struct ManualSource<T> {
	/// Inner
	inner: Rc<Inner<T>>,
}

impl<T> ManualSource<T> {
	/// Creates a new manual source
	#[track_caller]
	pub fn new(value: T) -> Self {
		let inner = Inner {
			value:    RefCell::new(value),
			notifier: Notifier::new(),
		};
		Self { inner: Rc::new(inner) }
	}

	/// Uses the current value
	pub fn with<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&T) -> O,
	{
		let value = self.inner.value.try_borrow().expect("Cannot access value while it's being updated");
		f(&value)
	}

	/// Sets the value without notifying
	pub fn set_raw(&self, new_value: T) -> T {
		let mut value = self
			.inner
			.value
			.try_borrow_mut()
			.expect("Cannot set value while it's being accessed");
		mem::replace(&mut *value, new_value)
	}

	/// Notifies all observers
	pub fn notify(&self) {
		self.inner.notifier.notify();
	}

	/// Sets the value and notifies all observers
	pub fn set(&self, new_value: T) {
		let _: T = self.replace(new_value);
	}

	/// Replaces the value, notifying all observers and returning the previous one
	pub fn replace(&self, new_value: T) -> T {
		let old_value = self.set_raw(new_value);
		self.notify();
		old_value
	}

	/// Updates the value and notifies all observers
	pub fn update<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&mut T) -> O,
	{
		let output = {
			let mut value = self
				.inner
				.value
				.try_borrow_mut()
				.expect("Cannot update value while it's being accessed");
			f(&mut value)
		};
		self.notify();
		output
	}

	/// Returns the number of observers
	#[must_use]
	pub fn observer_count(&self) -> usize {
		self.inner.notifier.observer_count()
	}
}

impl<T> Clone for ManualSource<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Default> Default for ManualSource<T> {
	#[track_caller]
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: Clone> Source for ManualSource<T> {
	type Value = T;

	fn get(&self) -> Self::Value {
		self.with(T::clone)
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.inner.notifier.subscribe(observer)
	}
}

impl<T: fmt::Debug> fmt::Debug for ManualSource<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut s = f.debug_struct("ManualSource");
		match self.inner.value.try_borrow() {
			Ok(value) => s.field("value", &*value),
			Err(_) => s.field("value", &"<borrowed>"),
		};

		s.field("notifier", &self.inner.notifier).finish()
	}
}
