//! Report projection
//!
//! Turns ranked, policy-applied sellers into `SellerReport`s. This is the only
//! place money is rounded.

use crate::core::policy::AwardedSeller;
use crate::types::SellerReport;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for money in reports
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round a money amount to two decimal places, halves away from zero
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Project awarded sellers into reports, preserving their order
pub fn format_reports(awarded: Vec<AwardedSeller>) -> Vec<SellerReport> {
    awarded.into_iter().map(format_report).collect()
}

fn format_report(awarded: AwardedSeller) -> SellerReport {
    let AwardedSeller {
        stats,
        bonus,
        top_products,
    } = awarded;

    SellerReport {
        seller_id: stats.seller_id,
        name: stats.name,
        revenue: round_money(stats.revenue),
        profit: round_money(stats.profit),
        sales_count: stats.sales_count,
        top_products,
        bonus: round_money(bonus),
    }
}
