//! Named change notifications

// Imports
use reprop_source::{Observer, Source, Subscription};

/// Forwards each notification of `source` as a change of the member `name`.
///
/// Used to implement host "property changed" notifications for
/// members backed by sources.
pub fn notify_changes_as<S, F>(source: &S, name: impl Into<String>, on_changed: F) -> Subscription
where
	S: Source,
	F: Fn(&str) + 'static,
{
	let name = name.into();
	source.subscribe_raw(Observer::new(move || on_changed(&name)))
}
