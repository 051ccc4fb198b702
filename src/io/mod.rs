//! I/O module
//!
//! Handles dataset loading and report output.
//!
//! # Components
//!
//! - `json_reader` - JSON dataset loading
//! - `report_format` - Report writers (JSON, CSV)

pub mod json_reader;
pub mod report_format;

pub use json_reader::{load_dataset, read_dataset};
pub use report_format::{
    create_writer, write_reports_csv, write_reports_json, CsvReportWriter, JsonReportWriter,
    ReportWriter,
};
