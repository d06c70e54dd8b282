//! Source operators
//!
//! Extension methods for composing and subscribing to sources.

// Imports
use crate::{
	And,
	BoxSource,
	Change,
	DefaultEq,
	Distinct,
	Eager,
	Lazy,
	Merge,
	Merge3,
	Or,
	Select,
	SelectMany,
	SelectManyWith,
	Source,
	Subscription,
	merge,
	subscribe,
};

/// Source operators
#[extend::ext_sized(name = SourceOps)]
pub impl<S> S
where
	S: Source,
{
	/// Erases the type of this source
	fn boxed(self) -> BoxSource<S::Value>
	where
		S: 'static,
	{
		BoxSource::new(self)
	}

	/// Suppresses notifications sent while subscribing to this source
	fn lazy(self) -> Lazy<S> {
		Lazy::new(self)
	}

	/// Notifies observers exactly once while subscribing to this source
	fn eager(self) -> Eager<S> {
		Eager::new(self)
	}

	/// Filters out notifications that don't change the value
	#[track_caller]
	fn distinct(self) -> Distinct<S, DefaultEq<S::Value>>
	where
		S::Value: PartialEq,
	{
		Distinct::new(self, <S::Value as PartialEq>::eq as DefaultEq<S::Value>)
	}

	/// Filters out notifications that don't change the value, according to `eq`
	#[track_caller]
	fn distinct_by<E>(self, eq: E) -> Distinct<S, E>
	where
		E: Fn(&S::Value, &S::Value) -> bool,
	{
		Distinct::new(self, eq)
	}

	/// Maps the value of this source
	fn select<F, T>(self, selector: F) -> Select<S, F>
	where
		F: Fn(S::Value) -> T,
	{
		Select::new(self, selector)
	}

	/// Chains this source into the source selected from its value
	fn select_many<F, R>(self, selector: F) -> SelectMany<S, F>
	where
		F: Fn(S::Value) -> R,
		R: Source,
	{
		SelectMany::new(self, selector)
	}

	/// Chains this source into the source selected from its value, combining both values
	fn select_many_with<F, C, M, T>(self, selector: F, combine: C) -> SelectManyWith<S, F, C>
	where
		F: Fn(S::Value) -> M,
		M: Source,
		C: Fn(S::Value, M::Value) -> T,
	{
		SelectManyWith::new(self, selector, combine)
	}

	/// Merges this source with another
	fn merge<R, F, T>(self, right: R, combine: F) -> Merge<S, R, F>
	where
		R: Source,
		F: Fn(S::Value, R::Value) -> T,
	{
		Merge::new(self, right, combine)
	}

	/// Merges this source with two others
	fn merge3<M, R, F, T>(self, middle: M, right: R, combine: F) -> Merge3<S, M, R, F>
	where
		M: Source,
		R: Source,
		F: Fn(S::Value, M::Value, R::Value) -> T,
	{
		Merge3::new(self, middle, right, combine)
	}

	/// Conjunction of this source with another
	#[track_caller]
	fn and<R>(self, right: R) -> And<S, R>
	where
		S: Source<Value = bool> + Clone + 'static,
		R: Source<Value = bool> + Clone + 'static,
	{
		merge::and(self, right)
	}

	/// Disjunction of this source with another
	#[track_caller]
	fn or<R>(self, right: R) -> Or<S, R>
	where
		S: Source<Value = bool> + Clone + 'static,
		R: Source<Value = bool> + Clone + 'static,
	{
		merge::or(self, right)
	}

	/// Subscribes to this source with its value.
	///
	/// `observer` is called once immediately, and afterwards whenever the value changes.
	#[track_caller]
	fn subscribe<F>(&self, observer: F) -> Subscription
	where
		S: Clone + 'static,
		S::Value: PartialEq + 'static,
		F: Fn(S::Value) + 'static,
	{
		subscribe::subscribe_by(self, observer, <S::Value as PartialEq>::eq)
	}

	/// Subscribes to this source with its value, comparing values with `eq`
	#[track_caller]
	fn subscribe_by<F, E>(&self, observer: F, eq: E) -> Subscription
	where
		S: Clone + 'static,
		S::Value: 'static,
		F: Fn(S::Value) + 'static,
		E: Fn(&S::Value, &S::Value) -> bool + 'static,
	{
		subscribe::subscribe_by(self, observer, eq)
	}

	/// Subscribes to this source with each change of its value
	#[track_caller]
	fn subscribe_to_changes<F>(&self, observer: F) -> Subscription
	where
		S: Clone + 'static,
		S::Value: Clone + Default + PartialEq + 'static,
		F: Fn(Change<S::Value>) + 'static,
	{
		subscribe::subscribe_to_changes_by(self, observer, <S::Value as PartialEq>::eq)
	}

	/// Subscribes to this source with each change of its value, comparing values with `eq`
	#[track_caller]
	fn subscribe_to_changes_by<F, E>(&self, observer: F, eq: E) -> Subscription
	where
		S: Clone + 'static,
		S::Value: Clone + Default + 'static,
		F: Fn(Change<S::Value>) + 'static,
		E: Fn(&S::Value, &S::Value) -> bool + 'static,
	{
		subscribe::subscribe_to_changes_by(self, observer, eq)
	}

	/// Subscribes to this source and another
	#[track_caller]
	fn merge_subscribe<R, F>(&self, right: &R, observer: F) -> Subscription
	where
		S: Clone + 'static,
		S::Value: Clone + PartialEq + 'static,
		R: Source + Clone + 'static,
		R::Value: Clone + PartialEq + 'static,
		F: Fn(S::Value, R::Value) + 'static,
	{
		subscribe::merge_subscribe_by(
			self,
			right,
			observer,
			<S::Value as PartialEq>::eq,
			<R::Value as PartialEq>::eq,
		)
	}

	/// Subscribes to this source and another, comparing each with its own equality function
	#[track_caller]
	fn merge_subscribe_by<R, F, LE, RE>(&self, right: &R, observer: F, left_eq: LE, right_eq: RE) -> Subscription
	where
		S: Clone + 'static,
		S::Value: Clone + 'static,
		R: Source + Clone + 'static,
		R::Value: Clone + 'static,
		F: Fn(S::Value, R::Value) + 'static,
		LE: Fn(&S::Value, &S::Value) -> bool + 'static,
		RE: Fn(&R::Value, &R::Value) -> bool + 'static,
	{
		subscribe::merge_subscribe_by(self, right, observer, left_eq, right_eq)
	}

	/// Subscribes to this source and two others
	#[track_caller]
	fn merge_subscribe3<M, R, F>(&self, middle: &M, right: &R, observer: F) -> Subscription
	where
		S: Clone + 'static,
		S::Value: Clone + PartialEq + 'static,
		M: Source + Clone + 'static,
		M::Value: Clone + PartialEq + 'static,
		R: Source + Clone + 'static,
		R::Value: Clone + PartialEq + 'static,
		F: Fn(S::Value, M::Value, R::Value) + 'static,
	{
		subscribe::merge_subscribe3_by(
			self,
			middle,
			right,
			observer,
			<S::Value as PartialEq>::eq,
			<M::Value as PartialEq>::eq,
			<R::Value as PartialEq>::eq,
		)
	}

	/// Subscribes to this source and two others, comparing each with its own equality function
	#[track_caller]
	fn merge_subscribe3_by<M, R, F, LE, ME, RE>(
		&self,
		middle: &M,
		right: &R,
		observer: F,
		left_eq: LE,
		middle_eq: ME,
		right_eq: RE,
	) -> Subscription
	where
		S: Clone + 'static,
		S::Value: Clone + 'static,
		M: Source + Clone + 'static,
		M::Value: Clone + 'static,
		R: Source + Clone + 'static,
		R::Value: Clone + 'static,
		F: Fn(S::Value, M::Value, R::Value) + 'static,
		LE: Fn(&S::Value, &S::Value) -> bool + 'static,
		ME: Fn(&M::Value, &M::Value) -> bool + 'static,
		RE: Fn(&R::Value, &R::Value) -> bool + 'static,
	{
		subscribe::merge_subscribe3_by(self, middle, right, observer, left_eq, middle_eq, right_eq)
	}
}
