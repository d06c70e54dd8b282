//! Properties

// Imports
use {
	core::fmt,
	reprop_source::{Observer, Source, Subscription},
	std::rc::Rc,
};

/// Assignable source.
///
/// # Contract
/// Setting a value should notify observers when it changed the value, as
/// read through [`get`](Source::get). Properties that filter equal values
/// shouldn't notify when set to a value equal to the current one.
pub trait Property: Source {
	/// Sets the value
	fn set(&self, value: Self::Value);
}

#[duplicate::duplicate_item(
	Ptr;
	[ &'_ P ];
	[ Rc<P> ];
	[ Box<P> ];
)]
impl<P> Property for Ptr
where
	P: ?Sized + Property,
{
	fn set(&self, value: Self::Value) {
		(**self).set(value);
	}
}

/// Property built from a source and a setter.
///
/// See [`create`].
pub struct FnProperty<S, F: ?Sized> {
	/// Source
	source: S,

	/// Setter
	setter: Rc<F>,
}

impl<S, F: ?Sized> FnProperty<S, F> {
	/// Creates a property from a source and a shared setter
	pub const fn from_rc(source: S, setter: Rc<F>) -> Self {
		Self { source, setter }
	}

	/// Returns the underlying source
	pub const fn source(&self) -> &S {
		&self.source
	}
}

impl<S: Clone, F: ?Sized> Clone for FnProperty<S, F> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			setter: Rc::clone(&self.setter),
		}
	}
}

impl<S: Source, F: ?Sized> Source for FnProperty<S, F> {
	type Value = S::Value;

	fn get(&self) -> Self::Value {
		self.source.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.source.subscribe_raw(observer)
	}
}

impl<S, F> Property for FnProperty<S, F>
where
	S: Source,
	F: ?Sized + Fn(S::Value),
{
	fn set(&self, value: Self::Value) {
		(self.setter)(value);
	}
}

impl<S: fmt::Debug, F: ?Sized> fmt::Debug for FnProperty<S, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnProperty")
			.field("source", &self.source)
			.finish_non_exhaustive()
	}
}

/// Creates a property from a source and a setter.
///
/// The setter is responsible for making the source notify when the value changes.
pub fn create<S, F>(source: S, setter: F) -> FnProperty<S, F>
where
	S: Source,
	F: Fn(S::Value),
{
	FnProperty::from_rc(source, Rc::new(setter))
}

/// Type-erased property
pub struct BoxProperty<T> {
	/// Inner
	inner: Rc<dyn Property<Value = T>>,
}

impl<T> BoxProperty<T> {
	/// Erases the type of a property
	pub fn new<P>(property: P) -> Self
	where
		P: Property<Value = T> + 'static,
	{
		Self {
			inner: Rc::new(property),
		}
	}
}

impl<T> Clone for BoxProperty<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T> Source for BoxProperty<T> {
	type Value = T;

	fn get(&self) -> Self::Value {
		self.inner.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.inner.subscribe_raw(observer)
	}
}

impl<T> Property for BoxProperty<T> {
	fn set(&self, value: Self::Value) {
		self.inner.set(value);
	}
}

impl<T> fmt::Debug for BoxProperty<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoxProperty").finish_non_exhaustive()
	}
}
