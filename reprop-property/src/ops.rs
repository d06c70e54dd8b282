//! Property operators

// Imports
use {
	crate::{BoxProperty, Property, SelectManyTwoWay, SelectTwoWay, binding},
	reprop_source::{Source, Subscription},
};

/// Property operators
#[extend::ext_sized(name = PropertyOps)]
pub impl<P> P
where
	P: Property,
{
	/// Erases the type of this property
	fn boxed_property(self) -> BoxProperty<P::Value>
	where
		P: 'static,
	{
		BoxProperty::new(self)
	}

	/// Maps this property forwards with `selector` and backwards with `back_selector`
	fn select_two_way<F, B, T>(self, selector: F, back_selector: B) -> SelectTwoWay<P, F, B>
	where
		F: Fn(P::Value) -> T,
		B: Fn(T) -> P::Value,
	{
		SelectTwoWay::new(self, selector, back_selector)
	}

	/// Binds this property and `other` to each other
	#[track_caller]
	fn two_way_bind<Q>(&self, other: &Q) -> Subscription
	where
		P: Clone + 'static,
		Q: Property<Value = P::Value> + Clone + 'static,
		P::Value: PartialEq + 'static,
	{
		binding::two_way_bind(self, other)
	}
}

/// Source binding operators
#[extend::ext_sized(name = SourceBindOps)]
pub impl<S> S
where
	S: Source,
{
	/// Binds `target` to this source
	#[track_caller]
	fn bind_to<P>(&self, target: P) -> Subscription
	where
		S: Clone + 'static,
		S::Value: PartialEq + 'static,
		P: Property<Value = S::Value> + 'static,
	{
		binding::bind_to(self, target)
	}

	/// Chains this source into the property selected from its value.
	///
	/// Writes go to the currently selected property.
	fn select_many_two_way<F, P>(self, selector: F) -> SelectManyTwoWay<S, F>
	where
		F: Fn(S::Value) -> P,
		P: Property,
	{
		SelectManyTwoWay::new(self, selector)
	}
}
