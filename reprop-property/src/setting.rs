//! Setting data

// Imports
use core::fmt;

/// Data for a custom setter.
///
/// Given to the setter of [`from_value_with_setter`](crate::from_value_with_setter),
/// which decides whether and what to commit.
pub struct SettingData<'a, T> {
	/// Current value
	current: T,

	/// Value that was set
	desired: T,

	/// Stores a value and notifies
	commit: &'a dyn Fn(T),
}

impl<'a, T> SettingData<'a, T> {
	/// Creates new setting data
	pub(crate) const fn new(current: T, desired: T, commit: &'a dyn Fn(T)) -> Self {
		Self {
			current,
			desired,
			commit,
		}
	}

	/// Returns the current value
	pub const fn current(&self) -> &T {
		&self.current
	}

	/// Returns the value that was set
	pub const fn desired(&self) -> &T {
		&self.desired
	}

	/// Sets a value and notifies
	pub fn set_and_notify(&self, value: T) {
		(self.commit)(value);
	}

	/// Sets the desired value and notifies
	pub fn accept(self) {
		(self.commit)(self.desired);
	}
}

impl<T: fmt::Debug> fmt::Debug for SettingData<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingData")
			.field("current", &self.current)
			.field("desired", &self.desired)
			.finish_non_exhaustive()
	}
}
