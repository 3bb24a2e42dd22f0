use clap::{ColorChoice, Parser};

use super::styles::cli_styles;

/// Command-line arguments accepted by the `emopick` binary.
///
/// The picker takes no options; only `--help` and `--version` are recognised.
#[derive(Parser, Debug)]
#[command(
	name = "emopick",
	version,
	about = "Pick an emoji with a fuzzy search and print it to stdout",
	long_about = "Type to filter the emoji list, move with Up/Down (or Ctrl-K/Ctrl-J), \
	              press Enter to print the highlighted emoji, Esc or Ctrl-C to quit \
	              without output.",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {}
