//! Error types for the seller report pipeline
//!
//! This module defines all error types that can occur while loading a dataset,
//! computing the report and writing it out. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Missing or empty collections, missing strategies
//! - **Referential Errors**: Purchases naming an unknown seller or product
//! - **Arithmetic Errors**: Overflow while accumulating totals
//! - **I/O Errors**: File not found, malformed JSON, failed output

use thiserror::Error;

/// Main error type for the report pipeline
///
/// Every variant is fatal to the call that produced it: the pipeline never
/// returns a partial report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The dataset is absent or one of its collections is missing, not a
    /// sequence, or empty
    #[error("Invalid input data: {reason}")]
    InvalidData {
        /// What is wrong with the dataset
        reason: String,
    },

    /// A required strategy is missing from the analysis options
    #[error("Invalid options: {reason}")]
    InvalidOptions {
        /// Which option is missing
        reason: String,
    },

    /// A purchase record references a seller that is not in the dataset
    #[error("Purchase record references unknown seller '{seller_id}'")]
    UnknownSeller {
        /// The dangling seller identifier
        seller_id: String,
    },

    /// A purchase item references a product that is not in the dataset
    #[error("Item sold by seller '{seller_id}' references unknown product '{sku}'")]
    UnknownProduct {
        /// The dangling sku
        sku: String,
        /// Seller owning the purchase record
        seller_id: String,
    },

    /// Arithmetic overflow would occur while accumulating totals
    #[error("Arithmetic overflow in {operation} for seller '{seller_id}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Seller being accumulated
        seller_id: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The dataset document could not be parsed
    #[error("JSON parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// The report could not be written
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the output failure
        message: String,
    },
}

// Conversion from io::Error to ReportError
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ReportError
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return ReportError::IoError {
                message: error.to_string(),
            };
        }

        // serde_json reports line 0 when the error is not tied to a position
        let line = Some(error.line()).filter(|&l| l > 0);

        ReportError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReportError (only raised while writing)
impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::OutputError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create an InvalidData error
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        ReportError::InvalidData {
            reason: reason.into(),
        }
    }

    /// Create an InvalidOptions error
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        ReportError::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Create an UnknownSeller error
    pub fn unknown_seller(seller_id: &str) -> Self {
        ReportError::UnknownSeller {
            seller_id: seller_id.to_string(),
        }
    }

    /// Create an UnknownProduct error
    pub fn unknown_product(sku: &str, seller_id: &str) -> Self {
        ReportError::UnknownProduct {
            sku: sku.to_string(),
            seller_id: seller_id.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, seller_id: &str) -> Self {
        ReportError::ArithmeticOverflow {
            operation: operation.to_string(),
            seller_id: seller_id.to_string(),
        }
    }

    /// Create an OutputError error
    pub fn output(message: impl Into<String>) -> Self {
        ReportError::OutputError {
            message: message.into(),
        }
    }
}
