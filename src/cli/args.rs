use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-seller sales performance reports
#[derive(Parser, Debug)]
#[command(name = "seller-report")]
#[command(about = "Compute per-seller revenue, profit, bonus and top products", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing the sales dataset
    #[arg(value_name = "INPUT", help = "Path to the input JSON dataset")]
    pub input_file: PathBuf,

    /// Output format for the report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Output format: 'json' for a JSON array or 'csv' for one row per seller"
    )]
    pub format: OutputFormat,

    /// Verbosity of diagnostics written to stderr
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

/// Available report output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl CliArgs {
    /// Log filter directive for the selected verbosity
    ///
    /// `RUST_LOG`-style directive handed to the tracing subscriber. Without
    /// `-v` only warnings and errors are shown.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
