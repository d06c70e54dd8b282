//! Observable sources
//!
//! A [`Source`] pairs a way of reading its current value with a way of
//! being told when that value may have changed.
//!
//! Sources are composed with the combinators in [`SourceOps`]: they can be
//! made lazy or eager, have repeated values filtered out, be mapped, chained
//! and merged, all while staying in sync with the sources they're built on.

// Modules
pub mod bind;
pub mod constant;
pub mod distinct;
pub mod eager;
pub mod error;
pub mod lazy;
mod loc;
pub mod manual;
pub mod merge;
pub mod notifier;
pub mod observer;
pub mod ops;
pub mod source;
pub mod subscribe;
pub mod subscription;

// Exports
pub use self::{
	bind::{Select, SelectMany, SelectManyWith},
	constant::{Constant, constant},
	distinct::{DefaultEq, Distinct},
	eager::Eager,
	error::Error,
	lazy::Lazy,
	loc::Loc,
	manual::ManualSource,
	merge::{And, Merge, Merge3, Or, and, or},
	notifier::Notifier,
	observer::Observer,
	ops::SourceOps,
	source::{BoxSource, FnSource, NotifierSource, Source, SourceBuilder, create, with_notifier},
	subscribe::Change,
	subscription::{Subscription, SubscriptionSet},
};
