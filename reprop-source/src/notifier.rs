//! Notifier
//!
//! An ordered list of observers, all of which are
//! notified, in registration order, when the notifier is.


// Imports
use {
	crate::{Loc, Observer, Subscription},
	core::{
		cell::{Cell, RefCell},
		fmt,
	},
	std::rc::{Rc, Weak},
};

/// Registration id
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
struct RegistrationId(u64);

/// Notifier inner
struct Inner {
	/// Observers, in registration order
	observers: RefCell<Vec<(RegistrationId, Observer)>>,

	/// Next registration id
	next_id: Cell<u64>,

	/// Where this notifier was defined
	defined_loc: Loc,
}

impl Inner {
	/// Returns whether a registration is still present
	fn contains(&self, id: RegistrationId) -> bool {
		self.observers.borrow().iter().any(|&(other_id, _)| other_id == id)
	}

	/// Removes a registration, returning its observer
	fn remove(&self, id: RegistrationId) -> Option<Observer> {
		let mut observers = self.observers.borrow_mut();
		let idx = observers.iter().position(|&(other_id, _)| other_id == id)?;
		Some(observers.remove(idx).1)
	}
}

/// Notifier
#[derive(Clone)]
pub struct Notifier {
	/// Inner
	inner: Rc<Inner>,
}

impl Notifier {
	/// Creates a new notifier with no observers
	#[must_use]
	#[track_caller]
	pub fn new() -> Self {
		let inner = Inner {
			observers:   RefCell::new(vec![]),
			next_id:     Cell::new(0),
			defined_loc: Loc::caller(),
		};
		Self { inner: Rc::new(inner) }
	}

	/// Registers an observer.
	///
	/// Registering the same observer more than once registers it that many times,
	/// with each returned subscription removing only its own registration.
	pub fn subscribe(&self, observer: Observer) -> Subscription {
		let id = RegistrationId(self.inner.next_id.get());
		self.inner.next_id.set(id.0 + 1);
		self.inner.observers.borrow_mut().push((id, observer));

		let inner = Rc::downgrade(&self.inner);
		Subscription::new(move || self::unsubscribe(&inner, id))
	}

	/// Notifies all observers.
	///
	/// Observers registered during this call won't be notified until the next one,
	/// while observers removed during it won't be notified if they haven't been yet.
	pub fn notify(&self) {
		self.notify_while(|| true);
	}

	/// Notifies observers while `proceed` returns `true`.
	///
	/// `proceed` is checked before each observer. Once it returns `false`, the
	/// remaining observers of this pass are skipped.
	pub fn notify_while<F>(&self, mut proceed: F)
	where
		F: FnMut() -> bool,
	{
		let observers = self.inner.observers.borrow().clone();
		tracing::trace!(
			defined_loc=%self.inner.defined_loc,
			observers=observers.len(),
			"Notifying observers"
		);

		for (id, observer) in observers {
			if !proceed() {
				tracing::trace!(defined_loc=%self.inner.defined_loc, "Notification pass stopped early");
				break;
			}
			if !self.inner.contains(id) {
				continue;
			}

			observer.notify();
		}
	}

	/// Returns the number of registered observers
	#[must_use]
	pub fn observer_count(&self) -> usize {
		self.inner.observers.borrow().len()
	}

	/// Returns if there are no registered observers
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.inner.observers.borrow().is_empty()
	}

	/// Returns where this notifier was defined
	#[must_use]
	pub fn defined_loc(&self) -> Loc {
		self.inner.defined_loc
	}
}

impl Default for Notifier {
	#[track_caller]
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Notifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Notifier")
			.field("observers", &self.observer_count())
			.field("defined_loc", &self.inner.defined_loc)
			.finish_non_exhaustive()
	}
}

/// Removes a registration from a notifier, if it still exists
fn unsubscribe(inner: &Weak<Inner>, id: RegistrationId) {
	let Some(inner) = inner.upgrade() else {
		return;
	};

	// Note: The observer is dropped only after the observers are no longer borrowed,
	//       since dropping it may cancel other subscriptions to this same notifier.
	let observer = inner.remove(id);
	drop(observer);
}
