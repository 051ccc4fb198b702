//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `seller`: Sellers, customers and products (the reference collections)
//! - `purchase`: Purchase records and their line items
//! - `accumulator`: Per-seller running totals built during analysis
//! - `dataset`: The input dataset bundling all four collections
//! - `report`: Output report records
//! - `error`: Error types for the report pipeline

pub mod accumulator;
pub mod dataset;
pub mod error;
pub mod purchase;
pub mod report;
pub mod seller;

pub use accumulator::{SellerAccumulator, SoldProducts};
pub use dataset::SalesDataset;
pub use error::ReportError;
pub use purchase::{Item, PurchaseRecord};
pub use report::{SellerReport, TopProduct};
pub use seller::{Customer, Product, Seller, SellerId, Sku};
