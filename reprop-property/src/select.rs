//! Derived properties

// Imports
use {
	crate::Property,
	core::fmt,
	reprop_source::{Observer, Select, SelectMany, Source, Subscription},
	std::rc::Rc,
};

/// Property mapped from another property, in both directions.
///
/// Reading maps the underlying value forwards, while setting
/// maps the new value backwards and sets the underlying property.
pub struct SelectTwoWay<P, F, B> {
	/// Forward mapping
	select: Select<P, F>,

	/// Backward mapping
	back_selector: Rc<B>,
}

impl<P, F, B> SelectTwoWay<P, F, B> {
	/// Maps a property
	pub fn new(property: P, selector: F, back_selector: B) -> Self {
		Self {
			select:        Select::new(property, selector),
			back_selector: Rc::new(back_selector),
		}
	}
}

impl<P: Clone, F, B> Clone for SelectTwoWay<P, F, B> {
	fn clone(&self) -> Self {
		Self {
			select:        self.select.clone(),
			back_selector: Rc::clone(&self.back_selector),
		}
	}
}

impl<P, F, B, T> Source for SelectTwoWay<P, F, B>
where
	P: Property + Clone + 'static,
	F: Fn(P::Value) -> T + 'static,
	T: Clone + 'static,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		self.select.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.select.subscribe_raw(observer)
	}
}

impl<P, F, B, T> Property for SelectTwoWay<P, F, B>
where
	P: Property + Clone + 'static,
	F: Fn(P::Value) -> T + 'static,
	B: Fn(T) -> P::Value,
	T: Clone + 'static,
{
	fn set(&self, value: Self::Value) {
		self.select.source().set((self.back_selector)(value));
	}
}

impl<P: fmt::Debug, F, B> fmt::Debug for SelectTwoWay<P, F, B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectTwoWay")
			.field("select", &self.select)
			.finish_non_exhaustive()
	}
}

/// Property selected from a source's value.
///
/// Reading and observing follow the currently selected property,
/// while setting sets the property selected at the time.
pub struct SelectManyTwoWay<S, F> {
	/// Binding
	select_many: SelectMany<S, F>,
}

impl<S, F> SelectManyTwoWay<S, F> {
	/// Creates a new bound property
	pub fn new(source: S, selector: F) -> Self {
		Self {
			select_many: SelectMany::new(source, selector),
		}
	}
}

impl<S: Clone, F> Clone for SelectManyTwoWay<S, F> {
	fn clone(&self) -> Self {
		Self {
			select_many: self.select_many.clone(),
		}
	}
}

impl<S, F, P> Source for SelectManyTwoWay<S, F>
where
	S: Source + Clone + 'static,
	F: Fn(S::Value) -> P + 'static,
	P: Property,
{
	type Value = P::Value;

	fn get(&self) -> Self::Value {
		self.select_many.get()
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		self.select_many.subscribe_raw(observer)
	}
}

impl<S, F, P> Property for SelectManyTwoWay<S, F>
where
	S: Source + Clone + 'static,
	F: Fn(S::Value) -> P + 'static,
	P: Property,
{
	fn set(&self, value: Self::Value) {
		let selected = (self.select_many.selector())(self.select_many.source().get());
		selected.set(value);
	}
}

impl<S: fmt::Debug, F> fmt::Debug for SelectManyTwoWay<S, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectManyTwoWay")
			.field("select_many", &self.select_many)
			.finish_non_exhaustive()
	}
}
