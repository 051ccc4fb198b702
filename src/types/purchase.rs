//! Purchase records and their line items

use super::seller::{SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line of a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Product sold on this line
    pub sku: Sku,

    /// Number of units sold
    pub quantity: u32,

    /// Unit sale price before discount
    pub sale_price: Decimal,

    /// Discount percentage applied to the line (0-100)
    pub discount: Decimal,
}

/// A completed purchase (receipt) attributed to one seller
///
/// Fields of the source data not needed for the report (receipt id, date,
/// customer id, ...) are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller credited with the sale
    pub seller_id: SellerId,

    /// Amount paid for the whole purchase
    ///
    /// Added verbatim to the seller's revenue; it is not recomputed from the
    /// items.
    pub total_amount: Decimal,

    /// Line items in receipt order
    pub items: Vec<Item>,
}
