//! Subscriptions
//!
//! A [`Subscription`] is the handle returned by subscribing an observer.
//! Cancelling it removes exactly the registration it was issued for.

// Imports
use core::{cell::RefCell, fmt, iter, mem};

/// Subscription
///
/// Cancelled either explicitly, through [`Subscription::cancel`], or when dropped.
/// Cancelling more than once has no further effect.
#[must_use = "Dropping a subscription cancels it. Use `Subscription::detach` to keep it registered"]
pub struct Subscription {
	/// Cancel function.
	///
	/// `None` once cancelled.
	cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
	/// Creates a new subscription that runs `cancel` once cancelled
	pub fn new<F>(cancel: F) -> Self
	where
		F: FnOnce() + 'static,
	{
		Self {
			cancel: RefCell::new(Some(Box::new(cancel))),
		}
	}

	/// Creates a subscription with nothing to cancel
	pub const fn empty() -> Self {
		Self {
			cancel: RefCell::new(None),
		}
	}

	/// Cancels this subscription
	pub fn cancel(&self) {
		// Note: We release the borrow before calling the function, since
		//       it might end up cancelling this same subscription.
		let cancel = self.cancel.borrow_mut().take();
		if let Some(cancel) = cancel {
			cancel();
		}
	}

	/// Returns whether this subscription has been cancelled.
	///
	/// Empty subscriptions are always cancelled.
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.cancel.borrow().is_none()
	}

	/// Detaches this subscription, leaving it registered forever
	pub fn detach(self) {
		let cancel = self.cancel.borrow_mut().take();
		mem::forget(cancel);
	}

	/// Joins this subscription with another, into one that cancels both
	pub fn join(self, other: Self) -> Self {
		Self::new(move || {
			self.cancel();
			other.cancel();
		})
	}
}

impl Default for Subscription {
	fn default() -> Self {
		Self::empty()
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.cancel();
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("cancelled", &self.is_cancelled())
			.finish_non_exhaustive()
	}
}

/// Subscription set.
///
/// Owns a group of subscriptions, cancelling them all, in
/// the order they were added, when cancelled or dropped.
#[derive(Default, Debug)]
pub struct SubscriptionSet {
	/// Subscriptions
	subscriptions: RefCell<Vec<Subscription>>,
}

impl SubscriptionSet {
	/// Creates a new, empty, set
	#[must_use]
	pub const fn new() -> Self {
		Self {
			subscriptions: RefCell::new(vec![]),
		}
	}

	/// Adds a subscription to this set
	pub fn add(&self, subscription: Subscription) {
		self.subscriptions.borrow_mut().push(subscription);
	}

	/// Returns the number of subscriptions in this set
	#[must_use]
	pub fn len(&self) -> usize {
		self.subscriptions.borrow().len()
	}

	/// Returns if this set is empty
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.subscriptions.borrow().is_empty()
	}

	/// Cancels all subscriptions in this set, leaving it empty
	pub fn cancel_all(&self) {
		let subscriptions = mem::take(&mut *self.subscriptions.borrow_mut());
		for subscription in subscriptions {
			subscription.cancel();
		}
	}

	/// Converts this set into a single subscription that cancels all of them
	pub fn into_subscription(self) -> Subscription {
		Subscription::new(move || self.cancel_all())
	}
}

impl Extend<Subscription> for SubscriptionSet {
	fn extend<I: IntoIterator<Item = Subscription>>(&mut self, subscriptions: I) {
		self.subscriptions.get_mut().extend(subscriptions);
	}
}

impl FromIterator<Subscription> for SubscriptionSet {
	fn from_iter<I: IntoIterator<Item = Subscription>>(subscriptions: I) -> Self {
		let mut set = Self::new();
		set.extend(subscriptions);
		set
	}
}

impl From<Subscription> for SubscriptionSet {
	fn from(subscription: Subscription) -> Self {
		iter::once(subscription).collect()
	}
}

impl Drop for SubscriptionSet {
	fn drop(&mut self) {
		self.cancel_all();
	}
}
