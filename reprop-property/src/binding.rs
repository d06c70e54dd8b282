//! Binding
//!
//! Keeps properties in sync with sources, and with each other.

// Imports
use {
	crate::Property,
	reprop_source::{Source, SourceOps, Subscription, SubscriptionSet},
};

/// Binds `target` to `source`.
///
/// `target` is set to the source's current value immediately,
/// and afterwards each time the source's value changes.
#[track_caller]
pub fn bind_to<S, P>(source: &S, target: P) -> Subscription
where
	S: Source + Clone + 'static,
	S::Value: PartialEq + 'static,
	P: Property<Value = S::Value> + 'static,
{
	source.subscribe(move |value| target.set(value))
}

/// Binds two properties to each other.
///
/// `second` is first set to `first`'s value, and afterwards
/// setting either of them sets the other.
#[track_caller]
pub fn two_way_bind<P1, P2, T>(first: &P1, second: &P2) -> Subscription
where
	P1: Property<Value = T> + Clone + 'static,
	P2: Property<Value = T> + Clone + 'static,
	T: PartialEq + 'static,
{
	tracing::trace!("Binding properties in both directions");
	let subscriptions = [self::bind_to(first, second.clone()), self::bind_to(second, first.clone())];
	subscriptions.into_iter().collect::<SubscriptionSet>().into_subscription()
}
