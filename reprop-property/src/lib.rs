//! Assignable properties
//!
//! A [`Property`] is a [`Source`](reprop_source::Source) that can also be set.
//!
//! Properties can be created from a value, derived from other properties in
//! both directions, and bound to sources or to each other.

// Modules
pub mod binding;
pub mod ops;
pub mod property;
pub mod select;
pub mod setting;
pub mod value;

// Exports
pub use self::{
	binding::{bind_to, two_way_bind},
	ops::{PropertyOps, SourceBindOps},
	property::{BoxProperty, FnProperty, Property, create},
	select::{SelectManyTwoWay, SelectTwoWay},
	setting::SettingData,
	value::{ValueProperty, from_default, from_value, from_value_by, from_value_with_hooks, from_value_with_setter},
};
