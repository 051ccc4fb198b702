//! Pluggable policy strategies for the report pipeline
//!
//! The pipeline delegates two business decisions to injected strategies:
//! how much revenue a line item earns, and what bonus a seller receives for
//! its profit rank. Both are traits with a single method, implemented for any
//! matching closure or function, so callers can pass plain functions, closures
//! or their own types.
//!
//! Reference policies live in the submodules:
//! - `revenue` - discounted sale price times quantity
//! - `bonus` - rank-based share of profit

use crate::types::{Item, SellerAccumulator};
use rust_decimal::Decimal;
use std::fmt;

pub mod bonus;
pub mod revenue;

pub use bonus::{bonus_rate, calculate_bonus_by_profit};
pub use revenue::calculate_simple_revenue;

/// Computes the revenue earned by a single purchase line
///
/// Implementations are expected to be pure: they are invoked once per item,
/// inline, in record order. `None` signals that the revenue is outside the
/// decimal range; the pipeline reports it as an arithmetic overflow.
pub trait RevenueStrategy {
    fn calculate_revenue(&self, item: &Item) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&Item) -> Option<Decimal>,
{
    fn calculate_revenue(&self, item: &Item) -> Option<Decimal> {
        self(item)
    }
}

/// Computes a seller's bonus amount from its profit rank
///
/// `rank` is zero-based in the profit-descending order and `total` is the
/// number of ranked sellers. The seller's accumulated statistics are passed
/// for policies that scale with profit.
pub trait BonusStrategy {
    fn calculate_bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> Decimal,
{
    fn calculate_bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        self(rank, total, seller)
    }
}

/// Strategies injected into the pipeline
///
/// Both strategies are required. They are optional here only so that a
/// partially configured value can be rejected by validation with a clear
/// error instead of being unrepresentable.
#[derive(Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Create options with both strategies set
    pub fn new(
        revenue: impl RevenueStrategy + 'static,
        bonus: impl BonusStrategy + 'static,
    ) -> Self {
        AnalysisOptions {
            calculate_revenue: Some(Box::new(revenue)),
            calculate_bonus: Some(Box::new(bonus)),
        }
    }

    /// Options wired with the reference policies
    ///
    /// Revenue is the discounted sale price times quantity; the bonus is
    /// 15% / 10% / 5% / 0% of profit depending on rank.
    pub fn standard() -> Self {
        AnalysisOptions::new(calculate_simple_revenue, calculate_bonus_by_profit)
    }

    /// Replace the revenue strategy
    pub fn with_revenue(mut self, revenue: impl RevenueStrategy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(revenue));
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus(mut self, bonus: impl BonusStrategy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(bonus));
        self
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
