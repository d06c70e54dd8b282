//! Synchronization
//!
//! Moves access to a source onto the execution context that owns it.

// Imports
use {
	core::fmt,
	reprop_source::{Observer, Source, Subscription},
	std::rc::Rc,
};

/// Execution context
pub trait Executor {
	/// Returns whether the caller is running on this context
	fn is_current(&self) -> bool;

	/// Runs `f` on this context, returning once it has run
	fn invoke(&self, f: &mut dyn FnMut());
}

/// Runs `f` on `executor`, directly if already on it
fn run_on<X: ?Sized + Executor>(executor: &X, f: &mut dyn FnMut()) {
	if executor.is_current() {
		f();
	} else {
		executor.invoke(f);
	}
}

/// Source synchronized with an executor.
///
/// See [`synchronize`].
pub struct Synchronized<S, X: ?Sized> {
	/// Source
	source: S,

	/// Executor
	executor: Rc<X>,
}

impl<S: Clone, X: ?Sized> Clone for Synchronized<S, X> {
	fn clone(&self) -> Self {
		Self {
			source:   self.source.clone(),
			executor: Rc::clone(&self.executor),
		}
	}
}

impl<S, X> Source for Synchronized<S, X>
where
	S: Source,
	X: ?Sized + Executor + 'static,
{
	type Value = S::Value;

	fn get(&self) -> Self::Value {
		let mut value = None;
		self::run_on(&*self.executor, &mut || value = Some(self.source.get()));
		value.expect("Executor didn't run the function")
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let executor = Rc::clone(&self.executor);
		self.source.subscribe_raw(Observer::new(move || {
			self::run_on(&*executor, &mut || observer.notify());
		}))
	}
}

impl<S: fmt::Debug, X: ?Sized> fmt::Debug for Synchronized<S, X> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Synchronized")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

/// Synchronizes a source with an executor.
///
/// Reading the value, and notifying observers, always happens on the executor.
pub fn synchronize<S, X>(source: S, executor: Rc<X>) -> Synchronized<S, X>
where
	S: Source,
	X: ?Sized + Executor,
{
	Synchronized { source, executor }
}
