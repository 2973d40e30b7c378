// 📊 Report Rendering - tabular, JSON and CSV views of the collected records
//
// All formats preserve insertion order. No sorting, no totals.

use std::io::Write;

use clap::ValueEnum;

use crate::entities::LoanRecord;
use crate::error::ReportError;
use crate::store::RecordCollection;

// ============================================================================
// FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width console table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// Comma-separated values with a header row
    Csv,
}

pub const COLUMN_LABELS: [&str; 6] = [
    "Record ID",
    "Customer ID",
    "Loan Type",
    "Interest Rate",
    "Amount Left",
    "Term Left",
];

const CSV_HEADERS: [&str; 6] = [
    "Record_ID",
    "Customer_ID",
    "Loan_Type",
    "Interest_Rate",
    "Amount_Left",
    "Term_Left",
];

// ============================================================================
// TABLE
// ============================================================================

/// Header row, padded to the same widths as `format_row`.
pub fn format_header() -> String {
    format!(
        "{:<10} {:<10} {:<10} {:<15} {:<15} {:<10}",
        COLUMN_LABELS[0],
        COLUMN_LABELS[1],
        COLUMN_LABELS[2],
        COLUMN_LABELS[3],
        COLUMN_LABELS[4],
        COLUMN_LABELS[5],
    )
}

/// Strings width 10, rate and amount width 15 with two decimals, term width 10.
/// The loan type is shown as it was entered.
pub fn format_row(record: &LoanRecord) -> String {
    format!(
        "{:<10} {:<10} {:<10} {:<15.2} {:<15.2} {:<10}",
        record.record_id(),
        record.customer_id(),
        record.loan_type_entry(),
        record.interest_rate(),
        record.amount_left(),
        record.term_left(),
    )
}

pub fn render_table(records: &RecordCollection) -> String {
    let mut table = String::from("\nRecords: \n");
    table.push_str(&format_header());
    table.push('\n');

    for record in records {
        table.push_str(&format_row(record));
        table.push('\n');
    }

    table
}

// ============================================================================
// RENDER
// ============================================================================

pub fn render<W: Write>(
    records: &RecordCollection,
    format: ReportFormat,
    out: &mut W,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Table => {
            out.write_all(render_table(records).as_bytes())?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records.records())?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            // Header written by hand so an empty collection still gets one
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *out);
            writer.write_record(CSV_HEADERS)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }

    out.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
