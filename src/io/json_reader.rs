//! JSON dataset loader
//!
//! Reads a sales dataset document shaped as
//!
//! ```json
//! {
//!   "sellers": [{ "id": "seller_1", "first_name": "Anna", "last_name": "Ivanova" }],
//!   "customers": [{ "id": "customer_1" }],
//!   "products": [{ "sku": "P1", "purchase_price": 10 }],
//!   "purchase_records": [
//!     { "seller_id": "seller_1", "total_amount": 50,
//!       "items": [{ "sku": "P1", "quantity": 5, "sale_price": 20, "discount": 0 }] }
//!   ]
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file yields `FileNotFound`, other read failures `IoError`
//! - A collection key holding something other than an array yields
//!   `InvalidData`, matching what validation reports for a missing collection
//! - Malformed records yield `ParseError` with the line when known
//!
//! A document that is JSON `null` loads as an absent dataset; a missing or
//! empty collection loads fine and is left for validation to reject.

use crate::types::{ReportError, SalesDataset};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Keys of the dataset document that must hold arrays when present
const COLLECTIONS: [&str; 4] = ["sellers", "customers", "products", "purchase_records"];

/// Load a dataset from a JSON file
///
/// # Returns
///
/// * `Ok(Some(dataset))` - the document is an object
/// * `Ok(None)` - the document is `null`
/// * `Err(ReportError)` - the file could not be read or parsed
pub fn load_dataset(path: &Path) -> Result<Option<SalesDataset>, ReportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ReportError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })?;

    debug!(path = %path.display(), "Loading sales dataset");
    read_dataset(BufReader::new(file))
}

/// Read a dataset from any JSON source
pub fn read_dataset<R: Read>(reader: R) -> Result<Option<SalesDataset>, ReportError> {
    let document: Value = serde_json::from_reader(reader)?;
    dataset_from_value(document)
}

/// Convert an already parsed JSON document into a dataset
pub fn dataset_from_value(document: Value) -> Result<Option<SalesDataset>, ReportError> {
    let object = match &document {
        Value::Null => return Ok(None),
        Value::Object(object) => object,
        _ => return Err(ReportError::invalid_data("dataset is not an object")),
    };

    for name in COLLECTIONS {
        match object.get(name) {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(ReportError::invalid_data(format!(
                    "{} is not a sequence",
                    name
                )))
            }
        }
    }

    let dataset: SalesDataset = serde_json::from_value(document)?;
    Ok(Some(dataset))
}
