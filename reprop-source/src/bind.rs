//! Binding
//!
//! Chains a source into another one, selected from its value.
//!
//! While subscribed, an observer is kept subscribed to the source
//! selected from the outer source's current value. Whenever the outer
//! source notifies, the previous inner subscription is cancelled, a new
//! inner source is selected and subscribed to, and the observer is notified.

// Imports
use {
	crate::{Constant, Lazy, Observer, Source, Subscription},
	core::{cell::RefCell, fmt, mem},
	std::rc::Rc,
};

/// Source selected from another source's value
pub struct SelectMany<S, F> {
	/// Outer source
	source: S,

	/// Selector
	selector: Rc<F>,
}

impl<S, F> SelectMany<S, F> {
	/// Creates a new bound source
	pub fn new(source: S, selector: F) -> Self {
		Self {
			source,
			selector: Rc::new(selector),
		}
	}

	/// Returns the outer source
	pub const fn source(&self) -> &S {
		&self.source
	}

	/// Returns the selector
	pub fn selector(&self) -> &F {
		&self.selector
	}
}

impl<S: Clone, F> Clone for SelectMany<S, F> {
	fn clone(&self) -> Self {
		Self {
			source:   self.source.clone(),
			selector: Rc::clone(&self.selector),
		}
	}
}

impl<S, F, R> Source for SelectMany<S, F>
where
	S: Source + Clone + 'static,
	F: Fn(S::Value) -> R + 'static,
	R: Source,
{
	type Value = R::Value;

	fn get(&self) -> Self::Value {
		(self.selector)(self.source.get()).get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let binding = Rc::new(Binding {
			source: self.source.clone(),
			selector: Rc::clone(&self.selector),
			observer,
			inner: RefCell::new(Subscription::empty()),
		});
		binding.rebind();

		let outer = Lazy::new(&self.source).subscribe_raw(Observer::new({
			let binding = Rc::clone(&binding);
			move || {
				binding.rebind();
				binding.observer.notify();
			}
		}));

		Subscription::new(move || {
			outer.cancel();
			let inner = mem::take(&mut *binding.inner.borrow_mut());
			inner.cancel();
		})
	}
}

impl<S: fmt::Debug, F> fmt::Debug for SelectMany<S, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectMany")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

/// Binding of a single observer
struct Binding<S, F> {
	/// Outer source
	source: S,

	/// Selector
	selector: Rc<F>,

	/// Observer
	observer: Observer,

	/// Subscription to the current inner source
	inner: RefCell<Subscription>,
}

impl<S, F, R> Binding<S, F>
where
	S: Source,
	F: Fn(S::Value) -> R,
	R: Source,
{
	/// Re-selects the inner source and subscribes to it
	fn rebind(&self) {
		let previous = mem::take(&mut *self.inner.borrow_mut());
		previous.cancel();

		tracing::trace!(observer=?self.observer, "Selecting inner source");
		let inner = (self.selector)(self.source.get());
		let subscription = Lazy::new(&inner).subscribe_raw(self.observer.clone());
		*self.inner.borrow_mut() = subscription;
	}
}

/// Source mapped from another source's value
pub struct Select<S, F> {
	/// Source
	source: S,

	/// Selector
	selector: Rc<F>,
}

impl<S, F> Select<S, F> {
	/// Creates a new mapped source
	pub fn new(source: S, selector: F) -> Self {
		Self {
			source,
			selector: Rc::new(selector),
		}
	}

	/// Returns the inner source
	pub const fn source(&self) -> &S {
		&self.source
	}

	/// Returns the selector
	pub fn selector(&self) -> &F {
		&self.selector
	}
}

impl<S: Clone, F> Clone for Select<S, F> {
	fn clone(&self) -> Self {
		Self {
			source:   self.source.clone(),
			selector: Rc::clone(&self.selector),
		}
	}
}

impl<S, F, T> Source for Select<S, F>
where
	S: Source + Clone + 'static,
	F: Fn(S::Value) -> T + 'static,
	T: Clone + 'static,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		(self.selector)(self.source.get())
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let selector = Rc::clone(&self.selector);
		SelectMany::new(self.source.clone(), move |value: S::Value| Constant::new(selector(value))).subscribe_raw(observer)
	}
}

impl<S: fmt::Debug, F> fmt::Debug for Select<S, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Select")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

/// Source selected from another source's value, combined with it
pub struct SelectManyWith<S, F, C> {
	/// Outer source
	source: S,

	/// Selector
	selector: Rc<F>,

	/// Combiner
	combine: Rc<C>,
}

impl<S, F, C> SelectManyWith<S, F, C> {
	/// Creates a new bound source
	pub fn new(source: S, selector: F, combine: C) -> Self {
		Self {
			source,
			selector: Rc::new(selector),
			combine: Rc::new(combine),
		}
	}
}

impl<S: Clone, F, C> Clone for SelectManyWith<S, F, C> {
	fn clone(&self) -> Self {
		Self {
			source:   self.source.clone(),
			selector: Rc::clone(&self.selector),
			combine:  Rc::clone(&self.combine),
		}
	}
}

impl<S, F, C, M, T> Source for SelectManyWith<S, F, C>
where
	S: Source + Clone + 'static,
	S::Value: Clone + 'static,
	F: Fn(S::Value) -> M + 'static,
	M: Source + Clone + 'static,
	C: Fn(S::Value, M::Value) -> T + 'static,
	T: Clone + 'static,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		let value = self.source.get();
		let inner = (self.selector)(value.clone()).get();
		(self.combine)(value, inner)
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let selector = Rc::clone(&self.selector);
		let combine = Rc::clone(&self.combine);
		SelectMany::new(self.source.clone(), move |value: S::Value| {
			let combine = Rc::clone(&combine);
			Select::new(selector(value.clone()), move |inner: M::Value| {
				combine(value.clone(), inner)
			})
		})
		.subscribe_raw(observer)
	}
}

impl<S: fmt::Debug, F, C> fmt::Debug for SelectManyWith<S, F, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectManyWith")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}
