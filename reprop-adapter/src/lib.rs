//! Adapters between sources and the outside world
//!
//! Turns host change events and named member accessors into sources and
//! properties, forwards source changes as named change notifications, and
//! moves source access onto an owning execution context.

// Modules
pub mod error;
pub mod event;
pub mod notify;
pub mod registry;
pub mod synchronize;

// Exports
pub use self::{
	error::Error,
	event::{EventSource, EventSourceBuilder, Handler, HostEvent, from_event},
	notify::notify_changes_as,
	registry::{Accessor, AccessorRegistry},
	synchronize::{Executor, Synchronized, synchronize},
};
