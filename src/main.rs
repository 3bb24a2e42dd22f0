//! Command-line entry point for the emopick emoji picker.

mod cli;

use std::io;

use anyhow::{Context, Result};
use emopick::{Catalog, Picker, logging};

/// Run the picker and print the chosen emoji.
///
/// Cancelling or confirming an empty match list exits successfully with no
/// output; any other failure is reported on stderr with a non-zero status.
fn main() -> Result<()> {
	cli::parse_cli();
	let logs = logging::initialize()?;

	let outcome = Picker::new(Catalog::builtin())
		.run_in_terminal()
		.context("emoji picker failed")?;

	cli::write_outcome(&mut io::stdout().lock(), outcome).context("failed to write selection")?;
	logs.flush().context("failed to write log output")?;
	Ok(())
}
