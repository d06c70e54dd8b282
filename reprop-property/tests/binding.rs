//! Binding tests

// Imports
use {
	core::cell::Cell,
	proptest::prelude::*,
	reprop_property::{Property, PropertyOps, SourceBindOps, bind_to, create, from_value, two_way_bind},
	reprop_source::{ManualSource, Observer, Source, SourceOps},
	std::rc::Rc,
};

#[test]
fn bind_to_sets_immediately_and_on_change() {
	let source = ManualSource::new(1);
	let target = from_value(0);

	let subscription = source.bind_to(target.clone());
	assert_eq!(target.get(), 1, "Target wasn't set immediately");

	source.set(2);
	assert_eq!(target.get(), 2);

	drop(subscription);
	source.set(3);
	assert_eq!(target.get(), 2, "Target was set after cancelling");
	assert_eq!(source.observer_count(), 0);
}

#[test]
fn bind_to_skips_unchanged() {
	let source = ManualSource::new(1);
	let sets = Rc::new(Cell::new(0));
	let target = create(ManualSource::new(0), {
		let sets = Rc::clone(&sets);
		move |_: i32| sets.set(sets.get() + 1)
	});

	let subscription = bind_to(&source, target);
	source.set(1);
	source.notify();
	assert_eq!(sets.get(), 1, "Target was set without the source changing");

	source.set(2);
	assert_eq!(sets.get(), 2);
	drop(subscription);
}

#[test]
fn bind_derived_source() {
	let first = ManualSource::new(1);
	let second = ManualSource::new(2);
	let target = from_value(0);

	let sum = first.clone().merge(second.clone(), |lhs: i32, rhs: i32| lhs + rhs);
	let subscription = sum.bind_to(target.clone());
	assert_eq!(target.get(), 3);

	first.set(10);
	assert_eq!(target.get(), 12);
	drop(subscription);
}

#[test]
fn two_way_bind_syncs_both_ways() {
	let first = from_value(1);
	let second = from_value(2);

	let subscription = first.two_way_bind(&second);
	assert_eq!((first.get(), second.get()), (1, 1), "Second wasn't set to first's value");

	first.set(3);
	assert_eq!(second.get(), 3);

	second.set(4);
	assert_eq!(first.get(), 4);

	drop(subscription);
	first.set(5);
	assert_eq!(second.get(), 4, "Binding outlived its subscription");
}

#[test]
fn two_way_bind_notifies_once_per_set() {
	let first = from_value('a');
	let second = from_value('b');
	let subscription = two_way_bind(&first, &second);

	let counts = [Rc::new(Cell::new(0)), Rc::new(Cell::new(0))];
	let observers = [first.clone(), second.clone()]
		.iter()
		.zip(&counts)
		.map(|(property, count)| {
			let count = Rc::clone(count);
			property.subscribe_raw(Observer::new(move || count.set(count.get() + 1)))
		})
		.collect::<Vec<_>>();

	first.set('c');
	second.set('d');
	assert_eq!((counts[0].get(), counts[1].get()), (2, 2));

	drop((observers, subscription));
}

proptest! {
	/// Any sequence of sets to either side converges both to the last value set
	#[test]
	fn two_way_bind_converges(initial in (0..8i32, 0..8i32), sets in prop::collection::vec((any::<bool>(), 0..8i32), 0..24)) {
		let first = from_value(initial.0);
		let second = from_value(initial.1);
		let subscription = first.two_way_bind(&second);

		for (to_first, value) in sets {
			if to_first {
				first.set(value);
			} else {
				second.set(value);
			}

			prop_assert_eq!(first.get(), value);
			prop_assert_eq!(second.get(), value);
		}

		drop(subscription);
	}
}
