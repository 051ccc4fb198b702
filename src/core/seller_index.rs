//! Seller and product lookup structures
//!
//! This module builds, from the validated reference collections:
//! - one fresh `SellerAccumulator` per seller, in seller input order, with an
//!   id -> position map for resolving purchase records
//! - an sku -> `Product` map for cost lookups
//!
//! Both are rebuilt from scratch on every analysis; nothing is cached.

use crate::types::{Product, Seller, SellerAccumulator, SellerId};
use std::collections::HashMap;
use tracing::warn;

/// Accumulators for all sellers, addressable by seller id
///
/// Positions follow the input order of sellers, which is the tie-break order
/// when ranking by profit. The number of accumulators is fixed at build time.
#[derive(Debug, Clone)]
pub struct SellerIndex {
    accumulators: Vec<SellerAccumulator>,
    positions: HashMap<SellerId, usize>,
}

impl SellerIndex {
    /// Create one zeroed accumulator per seller
    ///
    /// If the same seller id appears twice, both accumulators are kept and
    /// purchases resolve to the first one.
    pub fn build(sellers: &[Seller]) -> Self {
        let accumulators: Vec<SellerAccumulator> =
            sellers.iter().map(SellerAccumulator::new).collect();

        let mut positions = HashMap::with_capacity(accumulators.len());
        for (position, acc) in accumulators.iter().enumerate() {
            if positions.contains_key(&acc.seller_id) {
                warn!(
                    seller_id = %acc.seller_id,
                    position,
                    "Duplicate seller id, purchases resolve to the first occurrence"
                );
                continue;
            }
            positions.insert(acc.seller_id.clone(), position);
        }

        SellerIndex {
            accumulators,
            positions,
        }
    }

    /// Mutable access to the accumulator of `seller_id`, if known
    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerAccumulator> {
        let position = *self.positions.get(seller_id)?;
        self.accumulators.get_mut(position)
    }

    /// Release the accumulators in seller input order
    pub fn into_accumulators(self) -> Vec<SellerAccumulator> {
        self.accumulators
    }
}

/// Products addressable by sku
#[derive(Debug, Clone)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    /// Index products by sku; a repeated sku resolves to its last occurrence
    pub fn build(products: &'a [Product]) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for product in products {
            if index.insert(product.sku.as_str(), product).is_some() {
                warn!(sku = %product.sku, "Duplicate product sku, the last occurrence is used");
            }
        }

        ProductIndex { products: index }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }
}

#[cfg(test)]
impl SellerIndex {
    pub(crate) fn get(&self, seller_id: &str) -> Option<&SellerAccumulator> {
        let position = *self.positions.get(seller_id)?;
        self.accumulators.get(position)
    }

    pub(crate) fn len(&self) -> usize {
        self.accumulators.len()
    }
}

#[cfg(test)]
impl ProductIndex<'_> {
    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }
}
