mod args;
mod output;

pub(crate) use args::parse_cli;
pub(crate) use output::write_outcome;
