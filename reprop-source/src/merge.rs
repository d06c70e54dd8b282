//! Merging
//!
//! Combines the values of several sources into one.
//!
//! Merged sources are built on top of [`SelectMany`] and [`Select`],
//! so an observer is notified once for each notification from any
//! of the merged sources.

// Imports
use {
	crate::{Distinct, Observer, Select, SelectMany, Source, Subscription},
	core::fmt,
	std::rc::Rc,
};

/// Merge of two sources
pub struct Merge<L, R, F> {
	/// Left source
	left: L,

	/// Right source
	right: R,

	/// Combiner
	combine: Rc<F>,
}

impl<L, R, F> Merge<L, R, F> {
	/// Merges two sources
	pub fn new(left: L, right: R, combine: F) -> Self {
		Self {
			left,
			right,
			combine: Rc::new(combine),
		}
	}
}

impl<L: Clone, R: Clone, F> Clone for Merge<L, R, F> {
	fn clone(&self) -> Self {
		Self {
			left:    self.left.clone(),
			right:   self.right.clone(),
			combine: Rc::clone(&self.combine),
		}
	}
}

impl<L, R, F, T> Source for Merge<L, R, F>
where
	L: Source + Clone + 'static,
	L::Value: Clone + 'static,
	R: Source + Clone + 'static,
	F: Fn(L::Value, R::Value) -> T + 'static,
	T: Clone + 'static,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		(self.combine)(self.left.get(), self.right.get())
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let right = self.right.clone();
		let combine = Rc::clone(&self.combine);
		SelectMany::new(self.left.clone(), move |left: L::Value| {
			let combine = Rc::clone(&combine);
			Select::new(right.clone(), move |right: R::Value| combine(left.clone(), right))
		})
		.subscribe_raw(observer)
	}
}

impl<L: fmt::Debug, R: fmt::Debug, F> fmt::Debug for Merge<L, R, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Merge")
			.field("left", &self.left)
			.field("right", &self.right)
			.finish_non_exhaustive()
	}
}

/// Merge of three sources
pub struct Merge3<L, M, R, F> {
	/// Left source
	left: L,

	/// Middle source
	middle: M,

	/// Right source
	right: R,

	/// Combiner
	combine: Rc<F>,
}

impl<L, M, R, F> Merge3<L, M, R, F> {
	/// Merges three sources
	pub fn new(left: L, middle: M, right: R, combine: F) -> Self {
		Self {
			left,
			middle,
			right,
			combine: Rc::new(combine),
		}
	}
}

impl<L: Clone, M: Clone, R: Clone, F> Clone for Merge3<L, M, R, F> {
	fn clone(&self) -> Self {
		Self {
			left:    self.left.clone(),
			middle:  self.middle.clone(),
			right:   self.right.clone(),
			combine: Rc::clone(&self.combine),
		}
	}
}

impl<L, M, R, F, T> Source for Merge3<L, M, R, F>
where
	L: Source + Clone + 'static,
	L::Value: Clone + 'static,
	M: Source + Clone + 'static,
	M::Value: Clone + 'static,
	R: Source + Clone + 'static,
	F: Fn(L::Value, M::Value, R::Value) -> T + 'static,
	T: Clone + 'static,
{
	type Value = T;

	fn get(&self) -> Self::Value {
		(self.combine)(self.left.get(), self.middle.get(), self.right.get())
	}

	fn subscribe_raw(&self, observer: Observer) -> Subscription {
		let middle = self.middle.clone();
		let right = self.right.clone();
		let combine = Rc::clone(&self.combine);
		SelectMany::new(self.left.clone(), move |left: L::Value| {
			let right = right.clone();
			let combine = Rc::clone(&combine);
			SelectMany::new(middle.clone(), move |middle: M::Value| {
				let left = left.clone();
				let combine = Rc::clone(&combine);
				Select::new(right.clone(), move |right: R::Value| {
					combine(left.clone(), middle.clone(), right)
				})
			})
		})
		.subscribe_raw(observer)
	}
}

impl<L: fmt::Debug, M: fmt::Debug, R: fmt::Debug, F> fmt::Debug for Merge3<L, M, R, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Merge3")
			.field("left", &self.left)
			.field("middle", &self.middle)
			.field("right", &self.right)
			.finish_non_exhaustive()
	}
}

/// Boolean combiner
type BoolCombine = fn(bool, bool) -> bool;

/// Boolean equality
type BoolEq = fn(&bool, &bool) -> bool;

/// Conjunction of two boolean sources
pub type And<L, R> = Distinct<Merge<L, R, BoolCombine>, BoolEq>;

/// Disjunction of two boolean sources
pub type Or<L, R> = Distinct<Merge<L, R, BoolCombine>, BoolEq>;

/// Creates the conjunction of two boolean sources.
///
/// Observers are only notified when the result changes.
#[track_caller]
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
	L: Source<Value = bool> + Clone + 'static,
	R: Source<Value = bool> + Clone + 'static,
{
	self::bool_merge(left, right, |left, right| left && right)
}

/// Creates the disjunction of two boolean sources.
///
/// Observers are only notified when the result changes.
#[track_caller]
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
	L: Source<Value = bool> + Clone + 'static,
	R: Source<Value = bool> + Clone + 'static,
{
	self::bool_merge(left, right, |left, right| left || right)
}

/// Merges two boolean sources with `combine`, filtering out repeated results
#[track_caller]
fn bool_merge<L, R>(left: L, right: R, combine: BoolCombine) -> Distinct<Merge<L, R, BoolCombine>, BoolEq>
where
	L: Source<Value = bool> + Clone + 'static,
	R: Source<Value = bool> + Clone + 'static,
{
	Distinct::new(Merge::new(left, right, combine), <bool as PartialEq>::eq as BoolEq)
}
