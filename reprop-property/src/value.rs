//! Value properties
//!
//! Properties that own their value.
//!
//! Setting them only stores the value, and notifies, when it isn't equal
//! to the current one, so binding value properties to each other never loops.

// Imports
use {
	crate::{FnProperty, SettingData},
	reprop_source::{ManualSource, Source},
	std::rc::Rc,
};

/// Value property
pub type ValueProperty<T> = FnProperty<ManualSource<T>, dyn Fn(T)>;

/// Creates a property holding `value`
#[track_caller]
pub fn from_value<T>(value: T) -> ValueProperty<T>
where
	T: Clone + PartialEq + 'static,
{
	self::from_value_by(value, T::eq)
}

/// Creates a property holding the default value
#[track_caller]
pub fn from_default<T>() -> ValueProperty<T>
where
	T: Clone + Default + PartialEq + 'static,
{
	self::from_value(T::default())
}

/// Creates a property holding `value`, comparing values with `eq`
#[track_caller]
pub fn from_value_by<T, E>(value: T, eq: E) -> ValueProperty<T>
where
	T: Clone + 'static,
	E: Fn(&T, &T) -> bool + 'static,
{
	self::from_value_with_hooks(value, |_| (), |_| (), eq)
}

/// Creates a property holding `value`, with hooks around each change.
///
/// When the value is set to one not equal to the current, according to `eq`,
/// `before` is called with the current value, the value is stored, `after` is
/// called with the new value, and finally the observers are notified.
#[track_caller]
pub fn from_value_with_hooks<T, B, A, E>(value: T, before: B, after: A, eq: E) -> ValueProperty<T>
where
	T: Clone + 'static,
	B: Fn(&T) + 'static,
	A: Fn(&T) + 'static,
	E: Fn(&T, &T) -> bool + 'static,
{
	let source = ManualSource::new(value);
	let setter: Rc<dyn Fn(T)> = Rc::new({
		let source = source.clone();
		move |value: T| {
			let current = source.get();
			if eq(&current, &value) {
				tracing::trace!("Ignoring set to an equal value");
				return;
			}

			before(&current);
			source.set_raw(value.clone());
			after(&value);
			source.notify();
		}
	});

	FnProperty::from_rc(source, setter)
}

/// Creates a property holding `value`, with a custom setter.
///
/// `setter` is called on each set with the current and desired values, and
/// decides what, if anything, to commit through [`SettingData::set_and_notify`].
/// Committing always stores the value and notifies, even if it's equal to the
/// current one, so setters that want to filter repeats must compare against
/// [`SettingData::current`] themselves.
#[track_caller]
pub fn from_value_with_setter<T, F>(value: T, setter: F) -> ValueProperty<T>
where
	T: Clone + 'static,
	F: Fn(SettingData<'_, T>) + 'static,
{
	let source = ManualSource::new(value);
	let commit = {
		let source = source.clone();
		move |value: T| source.set(value)
	};
	let setter: Rc<dyn Fn(T)> = Rc::new({
		let source = source.clone();
		move |desired: T| setter(SettingData::new(source.get(), desired, &commit))
	});

	FnProperty::from_rc(source, setter)
}
