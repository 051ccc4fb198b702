//! Profit ranking

use crate::types::SellerAccumulator;

/// Order sellers by profit, highest first
///
/// `sort_by` is a stable sort: sellers with equal profit keep their input
/// order, so rank-based bonuses are deterministic.
pub fn rank_by_profit(mut sellers: Vec<SellerAccumulator>) -> Vec<SellerAccumulator> {
    sellers.sort_by(|a, b| b.profit.cmp(&a.profit));
    sellers
}
