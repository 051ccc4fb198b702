//! Seller Performance Report CLI
//!
//! Command-line interface for computing per-seller sales reports from a JSON
//! dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.json > report.json
//! cargo run -- --format csv sales.json > report.csv
//! cargo run -- -vv --format csv sales.json
//! ```
//!
//! The program reads the dataset, computes the report with the reference
//! revenue and bonus policies, and writes the report to stdout. Diagnostics
//! go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing file, invalid dataset, dangling reference, etc.)

use seller_performance_report::cli;
use seller_performance_report::runner;
use seller_performance_report::strategy::AnalysisOptions;
use std::process;
use tracing::debug;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(std::io::stderr)
        .with_target(args.verbose >= 2)
        .with_line_number(args.verbose >= 3)
        .init();

    debug!("Seller report started with verbosity level: {}", args.verbose);

    // Output goes to stdout
    let mut output = std::io::stdout();
    let options = AnalysisOptions::standard();
    if let Err(e) = runner::run(&args.input_file, &options, args.format, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
