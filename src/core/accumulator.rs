//! Purchase accumulation
//!
//! Folds every purchase record into the accumulator of the seller it is
//! credited to. For each record the seller's sales count and revenue grow; for
//! each item the injected revenue strategy is invoked and the item's profit
//! (revenue minus purchase cost) and quantity are added.
//!
//! Arithmetic is checked and kept at full precision; rounding belongs to the
//! report formatter. A record naming an unknown seller, or an item naming an
//! unknown product, aborts the whole fold.

use crate::core::seller_index::{ProductIndex, SellerIndex};
use crate::strategy::RevenueStrategy;
use crate::types::{PurchaseRecord, ReportError, SellerAccumulator};
use rust_decimal::Decimal;
use tracing::trace;

/// Fold all purchase records into the seller index
///
/// # Arguments
///
/// * `index` - Freshly built seller accumulators
/// * `products` - Product lookup for purchase costs
/// * `records` - Purchase records in input order
/// * `revenue` - Strategy computing per-item revenue
///
/// # Errors
///
/// * `UnknownSeller` - a record's seller is not in the index
/// * `UnknownProduct` - an item's sku is not in the product index
/// * `ArithmeticOverflow` - a running total would overflow
pub fn accumulate(
    index: SellerIndex,
    products: &ProductIndex<'_>,
    records: &[PurchaseRecord],
    revenue: &dyn RevenueStrategy,
) -> Result<SellerIndex, ReportError> {
    records
        .iter()
        .try_fold(index, |mut index, record| -> Result<SellerIndex, ReportError> {
            let seller = index
                .get_mut(&record.seller_id)
                .ok_or_else(|| ReportError::unknown_seller(&record.seller_id))?;

            apply_purchase(seller, record, products, revenue)?;
            Ok(index)
        })
}

/// Add a single purchase record to a seller's running totals
///
/// The record's `total_amount` counts toward revenue as-is; item revenue from
/// the strategy only feeds profit.
pub fn apply_purchase(
    seller: &mut SellerAccumulator,
    record: &PurchaseRecord,
    products: &ProductIndex<'_>,
    revenue: &dyn RevenueStrategy,
) -> Result<(), ReportError> {
    trace!(
        seller_id = %seller.seller_id,
        items = record.items.len(),
        "Accumulating purchase record"
    );

    seller.sales_count = seller
        .sales_count
        .checked_add(1)
        .ok_or_else(|| ReportError::arithmetic_overflow("sales count", &seller.seller_id))?;

    seller.revenue = seller
        .revenue
        .checked_add(record.total_amount)
        .ok_or_else(|| ReportError::arithmetic_overflow("revenue", &seller.seller_id))?;

    for item in &record.items {
        let product = products
            .get(&item.sku)
            .ok_or_else(|| ReportError::unknown_product(&item.sku, &seller.seller_id))?;

        let cost = product
            .purchase_price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or_else(|| ReportError::arithmetic_overflow("cost", &seller.seller_id))?;

        let item_revenue = revenue
            .calculate_revenue(item)
            .ok_or_else(|| ReportError::arithmetic_overflow("item revenue", &seller.seller_id))?;

        let profit = item_revenue
            .checked_sub(cost)
            .and_then(|profit| seller.profit.checked_add(profit))
            .ok_or_else(|| ReportError::arithmetic_overflow("profit", &seller.seller_id))?;
        seller.profit = profit;

        seller
            .products_sold
            .add(&item.sku, u64::from(item.quantity))
            .ok_or_else(|| ReportError::arithmetic_overflow("quantity sold", &seller.seller_id))?;
    }

    Ok(())
}
