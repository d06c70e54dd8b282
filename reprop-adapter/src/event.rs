//! Host events
//!
//! Sources driven by "changed" events with add/remove handler semantics.

// Imports
use {
	core::{cell::RefCell, fmt},
	reprop_source::{BoxSource, Error, Observer, Source, Subscription},
	std::rc::Rc,
};

/// Event handler
pub type Handler = Rc<dyn Fn()>;

/// Host event.
///
/// A multicast event whose handlers are added and
/// removed by identity, like a host framework's events.
#[derive(Clone, Default)]
pub struct HostEvent {
	/// Handlers
	handlers: Rc<RefCell<Vec<Handler>>>,
}

impl HostEvent {
	/// Creates a new event with no handlers
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a handler
	pub fn add_handler(&self, handler: Handler) {
		self.handlers.borrow_mut().push(handler);
	}

	/// Removes the last registration of a handler.
	///
	/// Returns whether it was registered.
	pub fn remove_handler(&self, handler: &Handler) -> bool {
		let removed = {
			let mut handlers = self.handlers.borrow_mut();
			handlers
				.iter()
				.rposition(|other| Rc::ptr_eq(other, handler))
				.map(|idx| handlers.remove(idx))
		};

		removed.is_some()
	}

	/// Raises this event
	pub fn raise(&self) {
		let handlers = self.handlers.borrow().clone();
		tracing::trace!(handlers=handlers.len(), "Raising host event");
		for handler in handlers {
			handler();
		}
	}

	/// Returns the number of handlers
	#[must_use]
	pub fn handler_count(&self) -> usize {
		self.handlers.borrow().len()
	}
}

impl fmt::Debug for HostEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HostEvent")
			.field("handlers", &self.handler_count())
			.finish()
	}
}

/// Source driven by a host event.
///
/// See [`from_event`].
pub struct EventSource<G: ?Sized, A: ?Sized, R: ?Sized> {
	/// Get function
	get: Rc<G>,

	/// Adds a handler
	add_handler: Rc<A>,

	/// Removes a handler
	remove_handler: Rc<R>,
}

impl<G: ?Sized, A: ?Sized, R: ?Sized> Clone for EventSource<G, A, R> {
	fn clone(&self) -> Self {
		Self {
			get:            Rc::clone(&self.get),
			add_handler:    Rc::clone(&self.add_handler),
			remove_handler: Rc::clone(&self.remove_handler),
		}
	}
}

impl<T, G, A, R> Source for EventSource<G, A, R>
where
	G: ?Sized + Fn() -> T,
	A: ?Sized + Fn(Handler),
	R: ?Sized + Fn(&Handler) + 'static,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		(self.get)()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let handler: Handler = Rc::new(move || observer.notify());
		(self.add_handler)(Rc::clone(&handler));

		let remove_handler = Rc::clone(&self.remove_handler);
		Subscription::new(move || remove_handler(&handler))
	}
}

impl<G: ?Sized, A: ?Sized, R: ?Sized> fmt::Debug for EventSource<G, A, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventSource").finish_non_exhaustive()
	}
}

/// Creates a source from a get function and a host event's add/remove handler functions.
///
/// Each subscription adds its own handler, which is removed when cancelled.
pub fn from_event<T, G, A, R>(get: G, add_handler: A, remove_handler: R) -> EventSource<G, A, R>
where
	G: Fn() -> T,
	A: Fn(Handler),
	R: Fn(&Handler) + 'static,
{
	EventSource {
		get:            Rc::new(get),
		add_handler:    Rc::new(add_handler),
		remove_handler: Rc::new(remove_handler),
	}
}

/// Event source builder.
///
/// Like [`from_event`], but checks that all functions were given when building.
pub struct EventSourceBuilder<T> {
	/// Get function
	get: Option<Rc<dyn Fn() -> T>>,

	/// Adds a handler
	add_handler: Option<Rc<dyn Fn(Handler)>>,

	/// Removes a handler
	remove_handler: Option<Rc<dyn Fn(&Handler)>>,
}

impl<T: 'static> EventSourceBuilder<T> {
	/// Creates a new, empty, builder
	#[must_use]
	pub const fn new() -> Self {
		Self {
			get:            None,
			add_handler:    None,
			remove_handler: None,
		}
	}

	/// Builder for a [`HostEvent`]
	#[must_use]
	pub fn with_event(self, event: &HostEvent) -> Self {
		self.add_handler({
			let event = event.clone();
			move |handler| event.add_handler(handler)
		})
		.remove_handler({
			let event = event.clone();
			move |handler| {
				event.remove_handler(handler);
			}
		})
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

	/// Sets the add handler function
	#[must_use]
	pub fn add_handler<F>(mut self, add_handler: F) -> Self
	where
		F: Fn(Handler) + 'static,
	{
		self.add_handler = Some(Rc::new(add_handler));
		self
	}

	/// Sets the remove handler function
	#[must_use]
	pub fn remove_handler<F>(mut self, remove_handler: F) -> Self
	where
		F: Fn(&Handler) + 'static,
	{
		self.remove_handler = Some(Rc::new(remove_handler));
		self
	}

	/// Builds the source
	pub fn build(self) -> Result<BoxSource<T>, Error> {
		let get = self.get.ok_or(Error::InvalidArgument { name: "get" })?;
		let add_handler = self.add_handler.ok_or(Error::InvalidArgument { name: "add_handler" })?;
		let remove_handler = self
			.remove_handler
			.ok_or(Error::InvalidArgument { name: "remove_handler" })?;

		Ok(BoxSource::new(EventSource {
			get,
			add_handler,
			remove_handler,
		}))
	}
}

impl<T: 'static> Default for EventSourceBuilder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for EventSourceBuilder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventSourceBuilder")
			.field("get", &self.get.is_some())
			.field("add_handler", &self.add_handler.is_some())
			.field("remove_handler", &self.remove_handler.is_some())
			.finish()
	}
}
