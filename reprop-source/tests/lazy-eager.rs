//! Lazy and eager source tests

// Imports
use {
	core::cell::Cell,
	reprop_source::{ManualSource, Notifier, Observer, Source, SourceOps, create},
	std::rc::Rc,
};

/// Creates a source that notifies each observer twice while subscribing
fn chatty() -> (impl Source<Value = ()> + Clone, Notifier) {
	let notifier = Notifier::new();
	let source = create(
		{
			let notifier = notifier.clone();
			move |observer: Observer| {
				observer.notify();
				let subscription = notifier.subscribe(observer.clone());
				observer.notify();
				subscription
			}
		},
		|| (),
	);

	(source, notifier)
}

/// Creates an observer that counts how many times it was notified
fn counter() -> (Observer, Rc<Cell<usize>>) {
	let count = Rc::new(Cell::new(0));
	let observer = Observer::new({
		let count = Rc::clone(&count);
		move || count.set(count.get() + 1)
	});

	(observer, count)
}

#[test]
fn raw_chatty_notifies_during_subscribe() {
	let (source, _notifier) = chatty();
	let (observer, count) = counter();

	let _subscription = source.subscribe_raw(observer);
	assert_eq!(count.get(), 2);
}

#[test]
fn lazy_swallows_subscribe_notifications() {
	let (source, notifier) = chatty();
	let (observer, count) = counter();

	let subscription = source.lazy().subscribe_raw(observer);
	assert_eq!(count.get(), 0, "Lazy source notified while subscribing");

	notifier.notify();
	assert_eq!(count.get(), 1, "Lazy source didn't forward later notifications");

	subscription.cancel();
	notifier.notify();
	assert_eq!(count.get(), 1, "Cancelled lazy source kept forwarding");
}

#[test]
fn eager_notifies_exactly_once() {
	let (source, notifier) = chatty();
	let (observer, count) = counter();

	let subscription = source.eager().subscribe_raw(observer);
	assert_eq!(count.get(), 1, "Eager source didn't notify exactly once while subscribing");

	notifier.notify();
	assert_eq!(count.get(), 2);
	drop(subscription);
}

#[test]
fn eager_over_silent_source() {
	let source = ManualSource::new(0);
	let (observer, count) = counter();

	let subscription = source.clone().eager().subscribe_raw(observer);
	assert_eq!(count.get(), 1);

	source.set(1);
	assert_eq!(count.get(), 2);
	drop(subscription);
}

#[test]
fn lazy_then_eager() {
	let (source, notifier) = chatty();
	let (observer, count) = counter();

	let subscription = source.lazy().eager().subscribe_raw(observer);
	assert_eq!(count.get(), 1);

	notifier.notify();
	assert_eq!(count.get(), 2);
	drop(subscription);
}

#[test]
fn lazy_keeps_value() {
	let source = ManualSource::new(7);
	let lazy = source.clone().lazy();
	assert_eq!(lazy.get(), 7);

	source.set(8);
	assert_eq!(lazy.get(), 8);
	assert_eq!(source.clone().eager().get(), 8);
}
