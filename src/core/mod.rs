//! Core business logic module
//!
//! This module contains the report pipeline stages, in the order they run:
//! - `validator` - Dataset and options checks
//! - `seller_index` - Seller accumulators and product lookup
//! - `accumulator` - Folding purchase records into seller totals
//! - `ranker` - Profit-descending stable ranking
//! - `policy` - Bonus strategy and top-product selection
//! - `formatter` - Rounding and projection into reports
//! - `engine` - The pipeline entry point

pub mod accumulator;
pub mod engine;
pub mod formatter;
pub mod policy;
pub mod ranker;
pub mod seller_index;
pub mod validator;

pub use engine::{analyze_sales_data, SalesAnalyzer};
pub use seller_index::{ProductIndex, SellerIndex};
