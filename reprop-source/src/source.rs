//! Sources

// Imports
use {
	crate::{Error, Notifier, Observer, Subscription},
	core::fmt,
	std::rc::Rc,
};

/// Observable value.
///
/// # Contract
/// - [`get`](Self::get) returns the current value, whether or not anyone
///   is subscribed, and has no side effects.
/// - [`subscribe_raw`](Self::subscribe_raw) registers an observer to be notified
///   whenever the value may have changed, until the returned subscription is cancelled.
///   The observer may be notified any number of times during the call itself.
///   Use [`Lazy`](crate::Lazy) or [`Eager`](crate::Eager) to pin that down.
pub trait Source {
	/// Value type
	type Value;

	/// Gets the current value
	fn get(&self) -> Self::Value;

	/// Subscribes an observer to this source
	fn subscribe_raw(&self, observer: Observer) -> Subscription;
}

#[duplicate::duplicate_item(
	Ptr;
	[ &'_ S ];
	[ Rc<S> ];
	[ Box<S> ];
)]
impl<S> Source for Ptr
where
	S: ?Sized + Source,
{
	type Value = S::Value;

	fn get(&self) -> Self::Value {
		(**self).get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		(**self).subscribe_raw(observer)
	}
}

/// Type-erased source
pub struct BoxSource<T> {
	/// Inner
	inner: Rc<dyn Source<Value = T>>,
}

impl<T> BoxSource<T> {
	/// Erases the type of a source
	pub fn new<S>(source: S) -> Self
	where
		S: Source<Value = T> + 'static,
	{
		Self { inner: Rc::new(source) }
	}
}

impl<T> Clone for BoxSource<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T> Source for BoxSource<T> {
	type Value = T;

	fn get(&self) -> Self::Value {
		self.inner.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.inner.subscribe_raw(observer)
	}
}

impl<T> fmt::Debug for BoxSource<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoxSource").finish_non_exhaustive()
	}
}

/// Source built from a subscribe function and a get function.
///
/// See [`create`].
pub struct FnSource<Sub: ?Sized, Get: ?Sized> {
	/// Subscribe function
	subscribe: Rc<Sub>,

	/// Get function
	get: Rc<Get>,
}

impl<Sub: ?Sized, Get: ?Sized> Clone for FnSource<Sub, Get> {
	fn clone(&self) -> Self {
		Self {
			subscribe: Rc::clone(&self.subscribe),
			get:       Rc::clone(&self.get),
		}
	}
}

impl<T, Sub, Get> Source for FnSource<Sub, Get>
where
	Sub: ?Sized + Fn(Observer) -> Subscription,
	Get: ?Sized + Fn() -> T,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		(self.get)()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		(self.subscribe)(observer)
	}
}

impl<Sub: ?Sized, Get: ?Sized> fmt::Debug for FnSource<Sub, Get> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnSource").finish_non_exhaustive()
	}
}

/// Creates a source from a subscribe function and a get function
pub fn create<T, Sub, Get>(subscribe: Sub, get: Get) -> FnSource<Sub, Get>
where
	Sub: Fn(Observer) -> Subscription,
	Get: Fn() -> T,
{
	FnSource {
		subscribe: Rc::new(subscribe),
		get:       Rc::new(get),
	}
}

/// Source builder.
///
/// Like [`create`], but checks that both functions were given
/// when building, instead of at compile time.
pub struct SourceBuilder<T> {
	/// Subscribe function
	subscribe: Option<Rc<dyn Fn(Observer) -> Subscription>>,

	/// Get function
	get: Option<Rc<dyn Fn() -> T>>,
}

impl<T: 'static> SourceBuilder<T> {
	/// Creates a new, empty, builder
	#[must_use]
	pub const fn new() -> Self {
		Self {
			subscribe: None,
			get:       None,
		}
	}

	/// Sets the subscribe function
	#[must_use]
	pub fn subscribe<F>(mut self, subscribe: F) -> Self
	where
		F: Fn(Observer) -> Subscription + 'static,
	{
		self.subscribe = Some(Rc::new(subscribe));
		self
	}

	/// Sets the get function
	#[must_use]
	pub fn get<F>(mut self, get: F) -> Self
	where
		F: Fn() -> T + 'static,
	{
		self.get = Some(Rc::new(get));
		self
	}

	/// Builds the source
	pub fn build(self) -> Result<BoxSource<T>, Error> {
		let subscribe = self.subscribe.ok_or(Error::InvalidArgument { name: "subscribe" })?;
		let get = self.get.ok_or(Error::InvalidArgument { name: "get" })?;

		Ok(BoxSource::new(FnSource { subscribe, get }))
	}
}

impl<T: 'static> Default for SourceBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for SourceBuilder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SourceBuilder")
			.field("subscribe", &self.subscribe.is_some())
			.field("get", &self.get.is_some())
			.finish()
	}
}

/// Source notified through a [`Notifier`].
///
/// See [`with_notifier`].
pub struct NotifierSource<Get> {
	/// Get function
	get: Rc<Get>,

	/// Notifier
	notifier: Notifier,
}

impl<Get> Clone for NotifierSource<Get> {
	fn clone(&self) -> Self {
		Self {
			get:      Rc::clone(&self.get),
			notifier: self.notifier.clone(),
		}
	}
}

impl<T, Get> Source for NotifierSource<Get>
where
	Get: Fn() -> T,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		(self.get)()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.notifier.subscribe(observer)
	}
}

impl<Get> fmt::Debug for NotifierSource<Get> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NotifierSource")
			.field("notifier", &self.notifier)
			.finish_non_exhaustive()
	}
}

/// Creates a source whose value is read with `get`, together with the
/// notifier that must be notified whenever that value changes.
#[track_caller]
pub fn with_notifier<T, Get>(get: Get) -> (NotifierSource<Get>, Notifier)
where
	Get: Fn() -> T,
{
	let notifier = Notifier::new();
	let source = NotifierSource {
		get:      Rc::new(get),
		notifier: notifier.clone(),
	};

	(source, notifier)
}
