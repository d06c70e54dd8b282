//! Errors

/// Source error
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(thiserror::Error)]
pub enum Error {
	/// A required argument was missing
	#[error("Missing required argument `{name}`")]
	InvalidArgument {
		/// Argument name
		name: &'static str,
	},
}
