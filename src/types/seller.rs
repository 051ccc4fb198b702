//! Reference collections of the sales dataset
//!
//! Sellers and products are looked up by identifier while purchase records are
//! folded. Customers are carried along but never inspected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller identifier as it appears in the dataset (e.g. `seller_1`)
pub type SellerId = String;

/// Stock-keeping unit identifying a product
pub type Sku = String;

/// A seller whose purchases are aggregated into a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name used in reports: first and last name separated by one space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer record
///
/// Only the presence of customers is validated; their content is kept as raw
/// JSON so that any customer shape loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer(pub serde_json::Value);

/// A product card with its purchase (cost) price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,

    /// Cost of a single unit, used to derive profit
    pub purchase_price: Decimal,
}
