//! Distinct source
//!
//! Filters out notifications that don't change the value.
//!
//! A distinct source is *active* while it has at least one observer.
//! During an active period it holds a single subscription to the
//! underlying source and caches the last value it delivered, which
//! is shared by all of its observers. New values are compared against
//! the cache, and only forwarded (after updating it) when they differ.
//!
//! When the last observer is cancelled, the underlying subscription is
//! dropped and the cache is cleared, so the next period starts afresh.

// Imports
use {
	crate::{Lazy, Loc, Notifier, Observer, Source, Subscription},
	core::{
		cell::{Cell, RefCell},
		fmt,
	},
	std::rc::{Rc, Weak},
};

/// Default equality, through [`PartialEq`]
pub type DefaultEq<T> = fn(&T, &T) -> bool;

/// State
struct State<T> {
	/// Last value delivered.
	///
	/// Only `Some` during an active period.
	cached: RefCell<Option<T>>,

	/// Delivery generation.
	///
	/// Bumped each time the cache is updated, so that a delivery pass
	/// superseded by a nested one stops early.
	generation: Cell<u64>,

	/// Observers
	observers: Notifier,

	/// Subscription to the underlying source.
	///
	/// Only `Some` during an active period.
	upstream: RefCell<Option<Subscription>>,

	/// Where this source was defined
	defined_loc: Loc,
}

impl<T> State<T> {
	/// Ends the current active period
	fn stop(&self) {
		tracing::debug!(defined_loc=%self.defined_loc, "Distinct source no longer observed");

		let upstream = self.upstream.borrow_mut().take();
		drop(upstream);
		let cached = self.cached.borrow_mut().take();
		drop(cached);
	}
}

/// Distinct source
pub struct Distinct<S: Source, E> {
	/// Source
	source: S,

	/// Equality
	eq: Rc<E>,

	/// State
	state: Rc<State<S::Value>>,
}

impl<S: Source, E> Distinct<S, E> {
	/// Wraps a source, comparing values with `eq`
	#[track_caller]
	pub fn new(source: S, eq: E) -> Self {
		let state = State {
			cached:      RefCell::new(None),
			generation:  Cell::new(0),
			observers:   Notifier::new(),
			upstream:    RefCell::new(None),
			defined_loc: Loc::caller(),
		};

		Self {
			source,
			eq: Rc::new(eq),
			state: Rc::new(state),
		}
	}

	/// Returns the value last delivered to the observers.
	///
	/// Returns `None` outside of an active period.
	#[must_use]
	pub fn cached(&self) -> Option<S::Value>
	where
		S::Value: Clone,
	{
		self.state.cached.borrow().clone()
	}

	/// Returns whether this source is in an active period
	#[must_use]
	pub fn is_active(&self) -> bool {
		self.state.upstream.borrow().is_some()
	}

	/// Returns the number of observers
	#[must_use]
	pub fn observer_count(&self) -> usize {
		self.state.observers.observer_count()
	}
}

impl<S, E> Distinct<S, E>
where
	S: Source + Clone + 'static,
	S::Value: 'static,
	E: Fn(&S::Value, &S::Value) -> bool + 'static,
{
	/// Starts an active period
	fn start(&self) {
		tracing::debug!(defined_loc=%self.state.defined_loc, "Distinct source now observed");

		*self.state.cached.borrow_mut() = Some(self.source.get());
		let forward = Observer::new({
			let source = self.source.clone();
			let eq = Rc::clone(&self.eq);
			let state = Rc::downgrade(&self.state);
			move || self::forward(&source, &*eq, &state)
		});

		let upstream = Lazy::new(self.source.clone()).subscribe_raw(forward);
		*self.state.upstream.borrow_mut() = Some(upstream);
	}
}

impl<S: Source + Clone, E> Clone for Distinct<S, E> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			eq:     Rc::clone(&self.eq),
			state:  Rc::clone(&self.state),
		}
	}
}

impl<S, E> Source for Distinct<S, E>
where
	S: Source + Clone + 'static,
	S::Value: 'static,
	E: Fn(&S::Value, &S::Value) -> bool + 'static,
{
	type Value = S::Value;

	fn get(&self) -> Self::Value {
		self.source.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let subscription = self.state.observers.subscribe(observer.clone());
		if !self.is_active() {
			self.start();
		}
		observer.notify();

		let state = Rc::clone(&self.state);
		Subscription::new(move || {
			subscription.cancel();
			if state.observers.is_empty() {
				state.stop();
			}
		})
	}
}

impl<S: Source, E> fmt::Debug for Distinct<S, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Distinct")
			.field("active", &self.is_active())
			.field("observers", &self.observer_count())
			.field("defined_loc", &self.state.defined_loc)
			.finish_non_exhaustive()
	}
}

/// Forwards a notification from the underlying source, if the value changed
fn forward<S, E>(source: &S, eq: &E, state: &Weak<State<S::Value>>)
where
	S: Source,
	E: Fn(&S::Value, &S::Value) -> bool,
{
	let Some(state) = state.upgrade() else {
		return;
	};

	let value = source.get();
	let changed = state.cached.borrow().as_ref().is_none_or(|cached| !eq(cached, &value));
	if !changed {
		return;
	}

	*state.cached.borrow_mut() = Some(value);
	let generation = state.generation.get().wrapping_add(1);
	state.generation.set(generation);

	// Note: If an observer changes the source, the nested pass delivers the newer
	//       value to everyone, so the remaining observers of this pass are skipped.
	state.observers.notify_while(|| state.generation.get() == generation);
}
