//! Per-seller running totals
//!
//! This module defines the SellerAccumulator built for every seller before
//! purchase records are folded, and the insertion-ordered quantity map it uses
//! to track products sold.

use super::seller::{Seller, SellerId, Sku};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Running statistics of a single seller
///
/// Created once per seller with zeroed totals, mutated only while purchase
/// records are accumulated, then ranked and projected into a report.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    /// The seller this accumulator belongs to
    pub seller_id: SellerId,

    /// "first last"
    pub name: String,

    /// Sum of `total_amount` over the seller's purchase records
    ///
    /// Kept at full precision; rounding happens only in the final report.
    pub revenue: Decimal,

    /// Sum of item revenue minus item cost over all items sold
    pub profit: Decimal,

    /// Number of purchase records credited to the seller
    pub sales_count: u64,

    /// Quantity sold per sku
    pub products_sold: SoldProducts,
}

impl SellerAccumulator {
    /// Create an accumulator with zero totals and no products sold
    ///
    /// # Arguments
    ///
    /// * `seller` - The seller to accumulate statistics for
    pub fn new(seller: &Seller) -> Self {
        SellerAccumulator {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: SoldProducts::default(),
        }
    }
}

/// Cumulative quantity sold per sku, remembering first-sale order
///
/// Iteration yields skus in the order they were first sold, which is the
/// tie-break order for top products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoldProducts {
    entries: Vec<(Sku, u64)>,
    positions: HashMap<Sku, usize>,
}

impl SoldProducts {
    /// Add `quantity` units to `sku`, starting from zero on first sale
    ///
    /// Returns the new cumulative quantity, or None on overflow.
    pub fn add(&mut self, sku: &str, quantity: u64) -> Option<u64> {
        let position = match self.positions.get(sku) {
            Some(&position) => position,
            None => {
                self.entries.push((sku.to_string(), 0));
                let position = self.entries.len() - 1;
                self.positions.insert(sku.to_string(), position);
                position
            }
        };

        let entry = &mut self.entries[position].1;
        *entry = entry.checked_add(quantity)?;
        Some(*entry)
    }

    #[cfg(test)]
    pub(crate) fn quantity(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&position| self.entries[position].1)
    }

    /// Number of distinct skus sold
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(sku, quantity)` pairs in first-sale order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(sku, quantity)| (sku.as_str(), *quantity))
    }
}
