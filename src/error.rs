use std::io;

use thiserror::Error;

/// Failures that abort the picker.
///
/// Interrupting the picker or confirming an empty match list are ordinary
/// outcomes and are reported through [`Outcome`](crate::Outcome) instead.
#[derive(Debug, Error)]
pub enum PickerError {
	/// The terminal could not be acquired, drawn to, or read from.
	#[error("terminal i/o failed: {0}")]
	Terminal(#[from] io::Error),

	/// Enter was pressed while the cursor pointed past the last match.
	#[error("index out of range: cursor {cursor} with {len} matches")]
	CursorOutOfRange { cursor: usize, len: usize },

	/// The matcher produced a name that the catalog does not contain.
	#[error("no value found for matched key `{name}`")]
	MissingValue { name: String },
}
