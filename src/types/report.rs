//! Output records of the report pipeline

use super::seller::{SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product and the total quantity a seller sold of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// Final per-seller report line
///
/// Money fields are rounded to two decimal places and serialize as JSON
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,

    /// "first last"
    pub name: String,

    /// Sum of purchase totals credited to the seller
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,

    /// Sum of item revenue minus item cost
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,

    /// Number of purchase records credited to the seller
    pub sales_count: u64,

    /// Up to ten best-selling products, quantity descending
    pub top_products: Vec<TopProduct>,

    /// Bonus awarded by the bonus strategy
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
