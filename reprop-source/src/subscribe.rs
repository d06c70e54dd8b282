//! Subscribing
//!
//! Value-passing subscriptions, built on top of [`Source::subscribe_raw`].
//!
//! Unlike raw subscriptions, these call the observer once immediately with
//! the current value, and afterwards only when the value actually changes,
//! as decided by an equality function.

// Imports
use {
	crate::{Distinct, Eager, Merge, Merge3, Observer, Source, Subscription},
	core::cell::RefCell,
};

/// A change of value
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, Debug)]
#[derive(derive_more::Display)]
#[display("{old} -> {new}")]
pub struct Change<T> {
	/// Previous value
	pub old: T,

	/// Current value
	pub new: T,
}

/// Subscribes to a source with the current value, comparing values with `eq`
#[track_caller]
pub fn subscribe_by<S, F, E>(source: &S, observer: F, eq: E) -> Subscription
where
	S: Source + Clone + 'static,
	S::Value: 'static,
	F: Fn(S::Value) + 'static,
	E: Fn(&S::Value, &S::Value) -> bool + 'static,
{
	let distinct = Distinct::new(Eager::new(source.clone()), eq);
	let source = source.clone();
	distinct.subscribe_raw(Observer::new(move || observer(source.get())))
}

/// Subscribes to a source with each change of its value, comparing values with `eq`.
///
/// The first change's previous value is the default value.
#[track_caller]
pub fn subscribe_to_changes_by<S, F, E>(source: &S, observer: F, eq: E) -> Subscription
where
	S: Source + Clone + 'static,
	S::Value: Clone + Default + 'static,
	F: Fn(Change<S::Value>) + 'static,
	E: Fn(&S::Value, &S::Value) -> bool + 'static,
{
	let old = RefCell::new(S::Value::default());
	self::subscribe_by(
		source,
		move |new: S::Value| {
			let old = old.replace(new.clone());
			observer(Change { old, new });
		},
		eq,
	)
}

/// Subscribes to two sources, comparing each with its own equality function
#[track_caller]
pub fn merge_subscribe_by<L, R, F, LE, RE>(left: &L, right: &R, observer: F, left_eq: LE, right_eq: RE) -> Subscription
where
	L: Source + Clone + 'static,
	L::Value: Clone + 'static,
	R: Source + Clone + 'static,
	R::Value: Clone + 'static,
	F: Fn(L::Value, R::Value) + 'static,
	LE: Fn(&L::Value, &L::Value) -> bool + 'static,
	RE: Fn(&R::Value, &R::Value) -> bool + 'static,
{
	let merged = Merge::new(left.clone(), right.clone(), |left: L::Value, right: R::Value| (left, right));
	self::subscribe_by(
		&merged,
		move |(left, right)| observer(left, right),
		move |lhs: &(L::Value, R::Value), rhs: &(L::Value, R::Value)| left_eq(&lhs.0, &rhs.0) && right_eq(&lhs.1, &rhs.1),
	)
}

/// Subscribes to three sources, comparing each with its own equality function
#[track_caller]
pub fn merge_subscribe3_by<L, M, R, F, LE, ME, RE>(
	left: &L,
	middle: &M,
	right: &R,
	observer: F,
	left_eq: LE,
	middle_eq: ME,
	right_eq: RE,
) -> Subscription
where
	L: Source + Clone + 'static,
	L::Value: Clone + 'static,
	M: Source + Clone + 'static,
	M::Value: Clone + 'static,
	R: Source + Clone + 'static,
	R::Value: Clone + 'static,
	F: Fn(L::Value, M::Value, R::Value) + 'static,
	LE: Fn(&L::Value, &L::Value) -> bool + 'static,
	ME: Fn(&M::Value, &M::Value) -> bool + 'static,
	RE: Fn(&R::Value, &R::Value) -> bool + 'static,
{
	let merged = Merge3::new(
		left.clone(),
		middle.clone(),
		right.clone(),
		|left: L::Value, middle: M::Value, right: R::Value| (left, middle, right),
	);
	self::subscribe_by(
		&merged,
		move |(left, middle, right)| observer(left, middle, right),
		move |lhs: &(L::Value, M::Value, R::Value), rhs: &(L::Value, M::Value, R::Value)| {
			left_eq(&lhs.0, &rhs.0) && middle_eq(&lhs.1, &rhs.1) && right_eq(&lhs.2, &rhs.2)
		},
	)
}
