//! Observer

// Imports
use {core::fmt, std::rc::Rc};

/// Observer.
///
/// A callback invoked whenever the source it's subscribed
/// to may have changed. It carries no value: observers read
/// the current value back from the source.
#[derive(Clone)]
pub struct Observer {
	/// Callback
	inner: Rc<dyn Fn()>,
}

impl Observer {
	/// Creates a new observer
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Creates an observer that does nothing
	#[must_use]
	pub fn noop() -> Self {
		Self::new(|| ())
	}

	/// Notifies this observer
	pub fn notify(&self) {
		(self.inner)();
	}

	/// Returns a unique identifier to this observer.
	///
	/// Cloning the observer will retain the same id
	#[must_use]
	pub fn id(&self) -> usize {
		Rc::as_ptr(&self.inner).cast::<()>().addr()
	}
}

impl PartialEq for Observer {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for Observer {}

impl fmt::Debug for Observer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Observer").field("id", &self.id()).finish_non_exhaustive()
	}
}
