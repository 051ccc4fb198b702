//! Report output formats
//!
//! This module centralizes all output format concerns:
//! - `ReportWriter` trait for pluggable output formats
//! - JSON output (array of report objects)
//! - CSV output (one row per seller)
//!
//! The writer is selected at runtime from an `OutputFormat` through
//! `create_writer`.

use crate::cli::OutputFormat;
use crate::types::{ReportError, SellerReport, TopProduct};
use std::io::Write;

/// Serializes seller reports to an output stream
pub trait ReportWriter {
    /// Write all reports, in the given order, to `output`
    ///
    /// # Errors
    ///
    /// Returns `OutputError` if serialization or writing fails.
    fn write(&self, reports: &[SellerReport], output: &mut dyn Write) -> Result<(), ReportError>;
}

/// Pretty-printed JSON array of report objects
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportWriter;

impl ReportWriter for JsonReportWriter {
    fn write(&self, reports: &[SellerReport], output: &mut dyn Write) -> Result<(), ReportError> {
        write_reports_json(reports, output)
    }
}

/// CSV with one row per seller
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn write(&self, reports: &[SellerReport], output: &mut dyn Write) -> Result<(), ReportError> {
        write_reports_csv(reports, output)
    }
}

/// Create the writer for the requested output format
pub fn create_writer(format: OutputFormat) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonReportWriter),
        OutputFormat::Csv => Box::new(CsvReportWriter),
    }
}

/// Write reports as a pretty-printed JSON array followed by a newline
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, reports)
        .map_err(|e| ReportError::output(format!("Failed to write JSON report: {}", e)))?;

    writeln!(output)
        .map_err(|e| ReportError::output(format!("Failed to write JSON report: {}", e)))?;
    output
        .flush()
        .map_err(|e| ReportError::output(format!("Failed to flush output: {}", e)))
}

/// Write reports in CSV format
///
/// Columns: seller_id, name, revenue, profit, sales_count, bonus, top_products.
/// Money is written with exactly two decimals; top products are `sku:quantity`
/// pairs joined with `;`. Rows keep the report order (profit descending).
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "seller_id",
            "name",
            "revenue",
            "profit",
            "sales_count",
            "bonus",
            "top_products",
        ])
        .map_err(|e| ReportError::output(format!("Failed to write CSV header: {}", e)))?;

    for report in reports {
        writer
            .write_record(&[
                report.seller_id.clone(),
                report.name.clone(),
                format!("{:.2}", report.revenue),
                format!("{:.2}", report.profit),
                report.sales_count.to_string(),
                format!("{:.2}", report.bonus),
                format_top_products(&report.top_products),
            ])
            .map_err(|e| ReportError::output(format!("Failed to write report record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ReportError::output(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

/// `sku:quantity` pairs joined with `;`
fn format_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn report() -> SellerReport {
        SellerReport {
            seller_id: "seller_1".to_string(),
            name: "Anna Ivanova".to_string(),
            revenue: dec!(50),
            profit: dec!(12.25),
            sales_count: 1,
            top_products: vec![
                TopProduct {
                    sku: "P1".to_string(),
                    quantity: 5,
                },
                TopProduct {
                    sku: "P2".to_string(),
                    quantity: 1,
                },
            ],
            bonus: dec!(7.5),
        }
    }

    #[rstest]
    #[case::single_report(
        vec![report()],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         seller_1,Anna Ivanova,50.00,12.25,1,7.50,P1:5;P2:1\n"
    )]
    #[case::no_products(
        vec![SellerReport { top_products: vec![], ..report() }],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         seller_1,Anna Ivanova,50.00,12.25,1,7.50,\n"
    )]
    #[case::name_with_comma(
        vec![SellerReport { name: "Anna, Jr".to_string(), ..report() }],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         seller_1,\"Anna, Jr\",50.00,12.25,1,7.50,P1:5;P2:1\n"
    )]
    #[case::negative_profit(
        vec![SellerReport { profit: dec!(-2), bonus: dec!(0), ..report() }],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         seller_1,Anna Ivanova,50.00,-2.00,1,0.00,P1:5;P2:1\n"
    )]
    #[case::empty_reports(
        vec![],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n"
    )]
    fn test_write_reports_csv(#[case] reports: Vec<SellerReport>, #[case] expected_output: &str) {
        let mut output = Vec::new();
        let result = write_reports_csv(&reports, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }

    #[test]
    fn test_write_reports_json_uses_numbers() {
        let mut output = Vec::new();
        write_reports_json(&[report()], &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "seller_id": "seller_1",
                "name": "Anna Ivanova",
                "revenue": 50.0,
                "profit": 12.25,
                "sales_count": 1,
                "top_products": [
                    { "sku": "P1", "quantity": 5 },
                    { "sku": "P2", "quantity": 1 }
                ],
                "bonus": 7.5
            }])
        );
    }

    #[rstest]
    #[case::json(OutputFormat::Json, "\"seller_id\": \"seller_1\"")]
    #[case::csv(OutputFormat::Csv, "seller_1,Anna Ivanova")]
    fn test_create_writer(#[case] format: OutputFormat, #[case] expected_fragment: &str) {
        let writer = create_writer(format);
        let mut output = Vec::new();
        writer.write(&[report()], &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains(expected_fragment));
    }
}
