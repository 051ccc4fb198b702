//! Sales analysis engine
//!
//! This module provides the pipeline entry point that orchestrates the report
//! stages in a single synchronous pass:
//!
//! 1. validate the dataset and options
//! 2. build the seller and product indexes
//! 3. fold purchase records into seller accumulators
//! 4. rank sellers by profit
//! 5. apply the bonus strategy and select top products
//! 6. round and project the final reports
//!
//! Every call builds fresh accumulators, so independent calls never share
//! state.

use crate::core::seller_index::{ProductIndex, SellerIndex};
use crate::core::{accumulator, formatter, policy, ranker, validator};
use crate::strategy::AnalysisOptions;
use crate::types::{ReportError, SalesDataset, SellerReport};
use tracing::{debug, info};

/// Compute the per-seller performance report
///
/// # Arguments
///
/// * `data` - The dataset to analyze; `None` is rejected as invalid data
/// * `options` - Revenue and bonus strategies
///
/// # Returns
///
/// One report per seller, ordered by profit descending. Sellers with equal
/// profit keep their dataset order.
///
/// # Errors
///
/// * `InvalidData` / `InvalidOptions` - validation failed, nothing was computed
/// * `UnknownSeller` / `UnknownProduct` - a purchase references missing data
/// * `ArithmeticOverflow` - running totals exceeded the decimal range
pub fn analyze_sales_data(
    data: Option<&SalesDataset>,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, ReportError> {
    let input = validator::validate(data, options)?;

    debug!(
        sellers = input.sellers.len(),
        products = input.products.len(),
        purchase_records = input.purchase_records.len(),
        "Analyzing sales data"
    );

    let sellers = SellerIndex::build(input.sellers);
    let products = ProductIndex::build(input.products);

    let sellers = accumulator::accumulate(
        sellers,
        &products,
        input.purchase_records,
        input.revenue,
    )?;
    let ranked = ranker::rank_by_profit(sellers.into_accumulators());
    let awarded = policy::apply_policies(ranked, input.bonus);
    let reports = formatter::format_reports(awarded);

    info!(sellers = reports.len(), "Seller report computed");

    Ok(reports)
}

/// Report engine bound to a fixed set of strategies
///
/// Convenience wrapper for callers analyzing several datasets with the same
/// options.
#[derive(Debug)]
pub struct SalesAnalyzer {
    options: AnalysisOptions,
}

impl SalesAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        SalesAnalyzer { options }
    }

    /// Analyze `data` with this analyzer's strategies
    ///
    /// See [`analyze_sales_data`].
    pub fn analyze(&self, data: &SalesDataset) -> Result<Vec<SellerReport>, ReportError> {
        analyze_sales_data(Some(data), &self.options)
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }
}

impl Default for SalesAnalyzer {
    /// Analyzer using the reference revenue and bonus policies
    fn default() -> Self {
        SalesAnalyzer::new(AnalysisOptions::standard())
    }
}
