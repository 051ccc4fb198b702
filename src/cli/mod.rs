//! Command line of the `seller-report` binary

mod args;

pub use args::{CliArgs, OutputFormat};

use clap::Parser;

/// Read the input path, `--format` and `-v` count from the process arguments
///
/// `--help`, `--version` and invalid arguments are handled by clap, which
/// prints to the terminal and exits before a dataset is touched.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
