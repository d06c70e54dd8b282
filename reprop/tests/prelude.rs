//! End-to-end tests

// Imports
use {
	core::cell::RefCell,
	reprop::{prelude::*, property},
	std::rc::Rc,
};

/// Form with a derived, two-way bound, field
struct Form {
	/// First name
	first: ValueProperty<String>,

	/// Last name
	last: ValueProperty<String>,

	/// Whether the form can be submitted
	can_submit: BoxSource<bool>,
}

impl Form {
	/// Creates a new empty form
	fn new() -> Self {
		let first = property::from_default::<String>();
		let last = property::from_default::<String>();
		let can_submit = first
			.clone()
			.select(|first: String| !first.is_empty())
			.and(last.clone().select(|last: String| !last.is_empty()))
			.boxed();

		Self { first, last, can_submit }
	}
}

#[test]
fn form_enables_submit() {
	let form = Form::new();
	let states = Rc::new(RefCell::new(vec![]));
	let subscription = form.can_submit.subscribe({
		let states = Rc::clone(&states);
		move |state| states.borrow_mut().push(state)
	});

	form.first.set("Ada".to_owned());
	form.last.set("Lovelace".to_owned());
	form.first.set(String::new());
	assert_eq!(*states.borrow(), [false, true, false]);
	drop(subscription);
}

#[test]
fn mirrored_fields() {
	let form = Form::new();
	let mirror = property::from_default::<String>();
	let subscriptions = SubscriptionSet::from(form.first.two_way_bind(&mirror));

	mirror.set("Grace".to_owned());
	assert_eq!(form.first.get(), "Grace");

	let changes = Rc::new(RefCell::new(vec![]));
	subscriptions.add(form.first.subscribe_to_changes({
		let changes = Rc::clone(&changes);
		move |change: Change<String>| changes.borrow_mut().push(change.to_string())
	}));

	form.first.set("Alan".to_owned());
	assert_eq!(mirror.get(), "Alan");
	assert_eq!(*changes.borrow(), [" -> Grace", "Grace -> Alan"]);

	subscriptions.cancel_all();
	form.first.set("Edsger".to_owned());
	assert_eq!(mirror.get(), "Alan", "Binding outlived its subscription");
}
