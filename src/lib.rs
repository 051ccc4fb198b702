//! Seller Performance Report Library
//! # Overview
//!
//! This library computes a per-seller sales performance report from a batch of
//! purchase records: revenue, profit, number of sales, a rank-based bonus and
//! the ten best-selling products, ordered by profit.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Seller, Product, PurchaseRecord, SellerReport, etc.)
//! - [`strategy`] - Pluggable revenue and bonus strategies
//! - [`core`] - The report pipeline:
//!   - [`core::validator`] - Dataset and options checks
//!   - [`core::seller_index`] - Seller accumulators and product lookup
//!   - [`core::accumulator`] - Folding purchase records into seller totals
//!   - [`core::ranker`] - Profit ranking
//!   - [`core::policy`] - Bonuses and top products
//!   - [`core::formatter`] - Rounding and report projection
//!   - [`core::engine`] - Pipeline entry point
//! - [`io`] - JSON dataset loading and JSON/CSV report output
//! - [`cli`] - CLI arguments parsing
//! - [`runner`] - File-to-report orchestration used by the binary
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use seller_performance_report::strategy::AnalysisOptions;
//! use seller_performance_report::types::{Customer, Item, Product, PurchaseRecord, Seller};
//! use seller_performance_report::{analyze_sales_data, SalesDataset};
//!
//! let data = SalesDataset::new(
//!     vec![Seller {
//!         id: "seller_1".to_string(),
//!         first_name: "Anna".to_string(),
//!         last_name: "Ivanova".to_string(),
//!     }],
//!     vec![Customer(serde_json::json!({ "id": "customer_1" }))],
//!     vec![Product { sku: "P1".to_string(), purchase_price: Decimal::from(10) }],
//!     vec![PurchaseRecord {
//!         seller_id: "seller_1".to_string(),
//!         total_amount: Decimal::from(50),
//!         items: vec![Item {
//!             sku: "P1".to_string(),
//!             quantity: 5,
//!             sale_price: Decimal::from(20),
//!             discount: Decimal::ZERO,
//!         }],
//!     }],
//! );
//!
//! let reports = analyze_sales_data(Some(&data), &AnalysisOptions::standard()).unwrap();
//! assert_eq!(reports[0].profit, Decimal::from(50));
//! assert_eq!(reports[0].bonus, Decimal::new(750, 2));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod strategy;
pub mod types;

pub use core::{analyze_sales_data, SalesAnalyzer};
pub use io::{load_dataset, write_reports_csv, write_reports_json};
pub use strategy::{AnalysisOptions, BonusStrategy, RevenueStrategy};
pub use types::{
    Item, Product, PurchaseRecord, ReportError, SalesDataset, Seller, SellerAccumulator,
    SellerReport, TopProduct,
};
