//! Input validation
//!
//! Fails fast on a malformed dataset or incomplete options before any
//! accumulator is created. On success, hands out a borrowed view with the
//! optional layers of `SalesDataset` and `AnalysisOptions` stripped away so
//! later stages never re-check them.

use crate::strategy::{AnalysisOptions, BonusStrategy, RevenueStrategy};
use crate::types::{Product, PurchaseRecord, ReportError, SalesDataset, Seller};

/// Dataset and options that passed validation
pub struct ValidatedInput<'a> {
    pub sellers: &'a [Seller],
    pub products: &'a [Product],
    pub purchase_records: &'a [PurchaseRecord],
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// Validate the dataset shape and the presence of both strategies
///
/// # Errors
///
/// * `InvalidData` - the dataset is absent or a collection is missing or empty
/// * `InvalidOptions` - a strategy is missing
pub fn validate<'a>(
    data: Option<&'a SalesDataset>,
    options: &'a AnalysisOptions,
) -> Result<ValidatedInput<'a>, ReportError> {
    let data = data.ok_or_else(|| ReportError::invalid_data("dataset is missing"))?;

    let sellers = required("sellers", data.sellers.as_deref())?;
    required("customers", data.customers.as_deref())?;
    let products = required("products", data.products.as_deref())?;
    let purchase_records = required("purchase_records", data.purchase_records.as_deref())?;

    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| ReportError::invalid_options("calculate_revenue is missing"))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| ReportError::invalid_options("calculate_bonus is missing"))?;

    Ok(ValidatedInput {
        sellers,
        products,
        purchase_records,
        revenue,
        bonus,
    })
}

fn required<'a, T>(name: &str, collection: Option<&'a [T]>) -> Result<&'a [T], ReportError> {
    match collection {
        None => Err(ReportError::invalid_data(format!("{} is missing", name))),
        Some([]) => Err(ReportError::invalid_data(format!("{} is empty", name))),
        Some(items) => Ok(items),
    }
}
