//! Composable observable sources and properties
//!
//! See [`source`] for observable values and their combinators, [`property`]
//! for assignable values and bindings, and [`adapter`] for bridging both to
//! host objects and execution contexts.

// Exports
pub use {reprop_adapter as adapter, reprop_property as property, reprop_source as source};

/// Prelude
pub mod prelude {
	pub use crate::{
		adapter::{AccessorRegistry, Executor, HostEvent},
		property::{BoxProperty, Property, PropertyOps, SourceBindOps, ValueProperty},
		source::{BoxSource, Change, ManualSource, Observer, Source, SourceOps, Subscription, SubscriptionSet, constant},
	};
}
