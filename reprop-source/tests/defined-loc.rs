//! Definition location tests
//!
//! Locations are only tracked in debug builds.

#![cfg(debug_assertions)]

// Imports
use {
	core::fmt,
	reprop_source::{ManualSource, SourceOps, subscribe},
	std::sync::{Arc, Mutex},
	tracing::{
		Event,
		Metadata,
		Subscriber,
		field::{Field, Visit},
		span,
	},
};

/// Collects the definition locations of distinct source events
#[derive(Clone, Default)]
struct DistinctLocs {
	/// Locations, in event order
	locs: Arc<Mutex<Vec<String>>>,
}

impl DistinctLocs {
	/// Runs `f`, returning the locations of all distinct source events emitted during it
	fn collect<F: FnOnce()>(f: F) -> Vec<String> {
		let collector = Self::default();
		tracing::subscriber::with_default(collector.clone(), f);
		let locs = collector.locs.lock().expect("Poisoned");
		locs.clone()
	}
}

/// Event fields
#[derive(Default)]
struct Fields {
	/// Message
	message: Option<String>,

	/// Definition location
	defined_loc: Option<String>,
}

impl Visit for Fields {
	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		match field.name() {
			"message" => self.message = Some(format!("{value:?}")),
			"defined_loc" => self.defined_loc = Some(format!("{value:?}")),
			_ => (),
		}
	}
}

impl Subscriber for DistinctLocs {
	fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
		true
	}

	fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
		span::Id::from_u64(1)
	}

	fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

	fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

	fn event(&self, event: &Event<'_>) {
		let mut fields = Fields::default();
		event.record(&mut fields);

		let is_distinct = fields
			.message
			.as_deref()
			.is_some_and(|message| message.starts_with("Distinct source"));
		if !is_distinct {
			return;
		}

		if let Some(defined_loc) = fields.defined_loc {
			self.locs.lock().expect("Poisoned").push(defined_loc);
		}
	}

	fn enter(&self, _span: &span::Id) {}

	fn exit(&self, _span: &span::Id) {}
}

/// Asserts that all locations are in this file, and that there are `count` of them
#[track_caller]
fn assert_locs_here(locs: &[String], count: usize) {
	assert_eq!(locs.len(), count, "Unexpected number of distinct source events: {locs:?}");
	for loc in locs {
		assert!(loc.starts_with(file!()), "Location {loc:?} wasn't in {:?}", file!());
	}
}

#[test]
fn distinct_records_caller() {
	let source = ManualSource::new(1);
	let distinct = source.distinct();
	let debug = format!("{distinct:?}");
	assert!(debug.contains(file!()), "Debug output {debug:?} didn't contain the caller");
}

#[test]
fn subscribe_records_caller() {
	let source = ManualSource::new(1);
	let locs = DistinctLocs::collect(|| {
		let subscription = source.subscribe(|_| ());
		subscription.cancel();
	});

	// Start and end of the active period
	assert_locs_here(&locs, 2);
}

#[test]
fn subscribe_helpers_record_caller() {
	let left = ManualSource::new(1);
	let right = ManualSource::new("a");
	let locs = DistinctLocs::collect(|| {
		drop(subscribe::subscribe_by(&left, |_| (), |lhs, rhs| lhs == rhs));
		drop(left.subscribe_to_changes(|_| ()));
		drop(left.merge_subscribe(&right, |_, _| ()));
		drop(subscribe::merge_subscribe3_by(
			&left,
			&right,
			&left,
			|_, _, _| (),
			|lhs, rhs| lhs == rhs,
			|lhs, rhs| lhs == rhs,
			|lhs, rhs| lhs == rhs,
		));
	});

	assert_locs_here(&locs, 8);
}

#[test]
fn and_records_caller() {
	let left = ManualSource::new(true);
	let right = ManualSource::new(false);
	let locs = DistinctLocs::collect(|| {
		let both = left.clone().and(right.clone());
		drop(both.subscribe(|_| ()));
	});

	// Both the `and` and the subscription's distinct sources
	assert_locs_here(&locs, 4);
}
