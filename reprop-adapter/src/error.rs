//! Errors

/// Adapter error
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(thiserror::Error)]
pub enum Error {
	/// Invalid argument
	#[error(transparent)]
	InvalidArgument(#[from] reprop_source::Error),

	/// No member with the given name was registered
	#[error("Unknown member `{name}`, expected one of: {known}")]
	UnknownMember {
		/// Member name
		name: String,

		/// Known members, comma separated
		known: String,
	},

	/// Member isn't of the requested type
	#[error("Member `{name}` isn't of type `{expected}`")]
	TypeMismatch {
		/// Member name
		name: String,

		/// Requested type
		expected: &'static str,
	},

	/// Member has no change notification, so it can't be observed
	#[error("Member `{name}` has no change notification")]
	UnsupportedAccessor {
		/// Member name
		name: String,
	},

	/// Member has no setter
	#[error("Member `{name}` is read-only")]
	ReadOnlyMember {
		/// Member name
		name: String,
	},
}
