//! Input dataset for the report pipeline

use super::purchase::PurchaseRecord;
use super::seller::{Customer, Product, Seller};
use serde::{Deserialize, Serialize};

/// The four collections a report is computed from
///
/// Every collection is optional so that a dataset lacking one of them can be
/// represented and rejected by validation with a precise reason, rather than
/// failing somewhere inside deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    #[serde(default)]
    pub sellers: Option<Vec<Seller>>,

    #[serde(default)]
    pub customers: Option<Vec<Customer>>,

    #[serde(default)]
    pub products: Option<Vec<Product>>,

    #[serde(default)]
    pub purchase_records: Option<Vec<PurchaseRecord>>,
}

impl SalesDataset {
    /// Build a dataset with all four collections present
    pub fn new(
        sellers: Vec<Seller>,
        customers: Vec<Customer>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        SalesDataset {
            sellers: Some(sellers),
            customers: Some(customers),
            products: Some(products),
            purchase_records: Some(purchase_records),
        }
    }
}
