//! Benchmark suite for the report pipeline
//!
//! Measures `analyze_sales_data` on generated datasets of increasing size
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each dataset has 50 sellers and 200 products; only the number of purchase
//! records (three items each) varies.

use rust_decimal::Decimal;
use seller_performance_report::strategy::AnalysisOptions;
use seller_performance_report::types::{Customer, Item, Product, PurchaseRecord, Seller};
use seller_performance_report::{analyze_sales_data, SalesDataset};

const SELLERS: usize = 50;
const PRODUCTS: usize = 200;

fn main() {
    divan::main();
}

fn generate_dataset(records: usize) -> SalesDataset {
    let sellers = (0..SELLERS)
        .map(|n| Seller {
            id: format!("seller_{}", n),
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
        })
        .collect();

    let products = (0..PRODUCTS)
        .map(|n| Product {
            sku: format!("SKU_{:04}", n),
            purchase_price: Decimal::new(100 + n as i64, 1),
        })
        .collect();

    let purchase_records = (0..records)
        .map(|n| PurchaseRecord {
            seller_id: format!("seller_{}", n % SELLERS),
            total_amount: Decimal::new(50_000 + (n % 997) as i64, 2),
            items: (0..3)
                .map(|k| Item {
                    sku: format!("SKU_{:04}", (n * 7 + k * 13) % PRODUCTS),
                    quantity: 1 + ((n + k) % 5) as u32,
                    sale_price: Decimal::new(150 + ((n + k) % 50) as i64, 1),
                    discount: Decimal::from(((n + k) % 4) as u32 * 5),
                })
                .collect(),
        })
        .collect();

    SalesDataset::new(
        sellers,
        vec![Customer(serde_json::json!({ "id": "customer_1" }))],
        products,
        purchase_records,
    )
}

/// Benchmark the full pipeline with the reference strategies
#[divan::bench(args = [100, 1_000, 100_000])]
fn analyze(bencher: divan::Bencher, records: usize) {
    let data = generate_dataset(records);
    let options = AnalysisOptions::standard();

    bencher.bench_local(|| {
        analyze_sales_data(Some(divan::black_box(&data)), &options).expect("Analysis failed")
    });
}
