//! Distinct source tests

// Imports
use {
	core::cell::{Cell, RefCell},
	proptest::prelude::*,
	reprop_source::{ManualSource, Observer, Source, SourceOps},
	std::rc::Rc,
};

/// Creates an observer that records the source's value each time it's notified
fn recorder<S>(source: &S) -> (Observer, Rc<RefCell<Vec<S::Value>>>)
where
	S: Source + Clone + 'static,
	S::Value: 'static,
{
	let seen = Rc::new(RefCell::new(vec![]));
	let observer = Observer::new({
		let source = source.clone();
		let seen = Rc::clone(&seen);
		move || seen.borrow_mut().push(source.get())
	});

	(observer, seen)
}

#[test]
fn delivers_once_on_subscribe() {
	let source = ManualSource::new(1);
	let distinct = source.clone().distinct();
	let (observer, seen) = recorder(&distinct);

	let subscription = distinct.subscribe_raw(observer);
	assert_eq!(*seen.borrow(), [1], "Distinct didn't deliver on subscribe");
	drop(subscription);
}

#[test]
fn filters_repeated_values() {
	let source = ManualSource::new(1);
	let distinct = source.clone().distinct();
	let (observer, seen) = recorder(&distinct);
	let subscription = distinct.subscribe_raw(observer);

	source.notify();
	source.set(1);
	source.set(2);
	source.set(2);
	source.set(1);
	assert_eq!(*seen.borrow(), [1, 2, 1]);
	assert_eq!(distinct.cached(), Some(1));
	drop(subscription);
}

#[test]
fn notify_without_change() {
	let source = ManualSource::new(10);
	let distinct = source.clone().distinct();
	let (observer, seen) = recorder(&distinct);
	let subscription = distinct.subscribe_raw(observer);

	source.notify();
	assert_eq!(seen.borrow().len(), 1, "Notifying without a change was forwarded");

	source.set_raw(20);
	source.notify();
	assert_eq!(*seen.borrow(), [10, 20]);
	drop(subscription);
}

#[test]
fn uses_comparer() {
	let source = ManualSource::new("abc".to_owned());
	let distinct = source
		.clone()
		.distinct_by(|lhs: &String, rhs: &String| lhs.eq_ignore_ascii_case(rhs));
	let (observer, seen) = recorder(&distinct);
	let subscription = distinct.subscribe_raw(observer);

	source.set("ABC".to_owned());
	assert_eq!(seen.borrow().len(), 1, "Comparer wasn't used");

	source.set("abcd".to_owned());
	assert_eq!(*seen.borrow(), ["abc", "abcd"]);
	drop(subscription);
}

#[test]
fn cache_is_shared_between_observers() {
	let source = ManualSource::new(1);
	let distinct = source.clone().distinct();
	let (first, first_seen) = recorder(&distinct);
	let (second, second_seen) = recorder(&distinct);

	let first = distinct.subscribe_raw(first);
	source.set(2);
	let second = distinct.subscribe_raw(second);
	assert_eq!(distinct.observer_count(), 2);

	source.set(3);
	assert_eq!(*first_seen.borrow(), [1, 2, 3]);
	assert_eq!(*second_seen.borrow(), [2, 3]);

	// Each observer only gets each change once, even with the shared cache
	source.set(3);
	assert_eq!(first_seen.borrow().len(), 3);
	assert_eq!(second_seen.borrow().len(), 2);
	drop((first, second));
}

#[test]
fn single_upstream_subscription() {
	let source = ManualSource::new(0);
	let distinct = source.clone().distinct();

	let first = distinct.subscribe_raw(Observer::noop());
	let second = distinct.subscribe_raw(Observer::noop());
	assert_eq!(source.observer_count(), 1, "Distinct subscribed upstream more than once");

	first.cancel();
	assert!(distinct.is_active());
	assert_eq!(source.observer_count(), 1);

	second.cancel();
	assert!(!distinct.is_active(), "Distinct stayed active without observers");
	assert_eq!(source.observer_count(), 0);
	assert_eq!(distinct.cached(), None, "Cache wasn't cleared at the end of the active period");
}

#[test]
fn new_period_reseeds() {
	let source = ManualSource::new(1);
	let distinct = source.clone().distinct();

	let (observer, seen) = recorder(&distinct);
	drop(distinct.subscribe_raw(observer.clone()));

	// Changes while inactive aren't seen, but the next period starts with them
	source.set(2);
	let subscription = distinct.subscribe_raw(observer);
	assert_eq!(distinct.cached(), Some(2));

	source.set(2);
	source.set(3);
	assert_eq!(*seen.borrow(), [1, 2, 3]);
	drop(subscription);
}

#[test]
fn observer_subscribing_during_delivery() {
	let source = ManualSource::new(1);
	let distinct = source.clone().distinct();
	let inner_calls = Rc::new(Cell::new(0));
	let inner_subscriptions = Rc::new(RefCell::new(vec![]));

	let subscription = distinct.subscribe_raw(Observer::new({
		let distinct = distinct.clone();
		let inner_calls = Rc::clone(&inner_calls);
		let inner_subscriptions = Rc::clone(&inner_subscriptions);
		move || {
			let inner_calls = Rc::clone(&inner_calls);
			let subscription = distinct.subscribe_raw(Observer::new(move || inner_calls.set(inner_calls.get() + 1)));
			inner_subscriptions.borrow_mut().push(subscription);
		}
	}));
	assert_eq!(inner_calls.get(), 1);

	// The first inner observer is forwarded the change, while the
	// one added during this pass only gets its initial delivery.
	source.set(2);
	assert_eq!(inner_calls.get(), 3);
	assert_eq!(inner_subscriptions.borrow().len(), 2);
	drop(subscription);
}

#[test]
fn observer_changing_source_during_delivery() {
	let source = ManualSource::new(1);
	let distinct = source.clone().distinct();

	let first_seen = Rc::new(RefCell::new(vec![]));
	let first = distinct.subscribe_raw(Observer::new({
		let source = source.clone();
		let distinct = distinct.clone();
		let first_seen = Rc::clone(&first_seen);
		move || {
			let value = distinct.get();
			first_seen.borrow_mut().push(value);
			if value == 2 {
				source.set(3);
			}
		}
	}));
	let (second, second_seen) = recorder(&distinct);
	let second = distinct.subscribe_raw(second);

	source.set(2);
	assert_eq!(*first_seen.borrow(), [1, 2, 3]);
	assert_eq!(
		*second_seen.borrow(),
		[1, 3],
		"Observer was delivered a stale pass after a newer value"
	);
	assert_eq!(distinct.cached(), Some(3));
	drop((first, second));
}

/// Operation on the underlying source
#[derive(Clone, Debug)]
enum Op {
	/// Sets the value, and notifies
	Set(i8),

	/// Notifies without changing the value
	Notify,
}

/// Strategy for operations
fn op() -> impl Strategy<Value = Op> {
	prop_oneof![(-3i8..3).prop_map(Op::Set), Just(Op::Notify)]
}

proptest! {
	#[test]
	fn forwards_exactly_the_changes(initial in -3i8..3, ops in prop::collection::vec(op(), 0..32)) {
		let source = ManualSource::new(initial);
		let distinct = source.clone().distinct();
		let (observer, seen) = recorder(&distinct);
		let subscription = distinct.subscribe_raw(observer);

		let mut expected = vec![initial];
		for op in ops {
			match op {
				Op::Set(value) => source.set(value),
				Op::Notify => source.notify(),
			}

			let value = source.get();
			if expected.last() != Some(&value) {
				expected.push(value);
			}
		}

		prop_assert_eq!(&*seen.borrow(), &expected);
		drop(subscription);
	}
}
