//! File-to-report orchestration
//!
//! Ties the outer collaborators to the pipeline: load a JSON dataset, analyze
//! it, and write the report in the requested format. The pipeline itself never
//! touches files or streams.

use crate::cli::OutputFormat;
use crate::core::analyze_sales_data;
use crate::io::{create_writer, load_dataset};
use crate::strategy::AnalysisOptions;
use crate::types::ReportError;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load `input_path`, compute the report and write it to `output`
///
/// Nothing is written when loading or analysis fails.
///
/// # Examples
///
/// ```no_run
/// use seller_performance_report::cli::OutputFormat;
/// use seller_performance_report::runner::run;
/// use seller_performance_report::strategy::AnalysisOptions;
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// run(
///     Path::new("sales.json"),
///     &AnalysisOptions::standard(),
///     OutputFormat::Csv,
///     &mut output,
/// )
/// .expect("Report failed");
/// ```
pub fn run(
    input_path: &Path,
    options: &AnalysisOptions,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let dataset = load_dataset(input_path)?;
    let reports = analyze_sales_data(dataset.as_ref(), options)?;

    info!(
        input = %input_path.display(),
        format = ?format,
        sellers = reports.len(),
        "Writing seller report"
    );

    create_writer(format).write(&reports, output)
}
