//! CSV Export functionality
//!
//! Exports the transaction log, with resolved labels and normalized signs,
//! in spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::reports::LedgerSummary;
use crate::storage::Storage;

const HEADER: [&str; 6] = [
    "Description",
    "Amount",
    "Display Amount",
    "Category",
    "Category Label",
    "Expense",
];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> TallyResult<()> {
    let summary = LedgerSummary::generate(storage)?;
    write_summary_csv(&summary, writer)
}

/// Write an already generated summary as CSV
pub fn write_summary_csv<W: Write>(summary: &LedgerSummary, writer: W) -> TallyResult<()> {
    let export_err = |e: csv::Error| TallyError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for line in &summary.lines {
        let amount = line.amount.to_string();
        let display_amount = line.display_amount.to_string();
        csv_writer
            .write_record([
                line.description.as_str(),
                amount.as_str(),
                display_amount.as_str(),
                line.category.as_str(),
                line.category_label.as_str(),
                if line.is_expense { "true" } else { "false" },
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}
