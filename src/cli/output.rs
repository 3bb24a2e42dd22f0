use std::io::{self, Write};

use emopick::Outcome;

/// Write the result of a picker run: the selected value and a newline, or
/// nothing when the run was cancelled or matched nothing.
pub(crate) fn write_outcome(out: &mut impl Write, outcome: Outcome) -> io::Result<()> {
	match outcome {
		Outcome::Selected(value) => writeln!(out, "{value}"),
		Outcome::Interrupted | Outcome::NotFound => Ok(()),
	}
}
