//! Transaction display formatting
//!
//! The transaction log as plain lines plus a single-record detail view.

use crate::models::{CategoryRegistry, ExpenseClassifier, Transaction};
use crate::reports::{display_amount, LedgerSummary};

/// Format a single log line, e.g. "Szülinap: -5000 Ft (🎁 Ajándék)"
pub fn format_transaction_row(
    txn: &Transaction,
    registry: &CategoryRegistry,
    currency_symbol: &str,
) -> String {
    format!(
        "{}: {} ({})",
        txn.description,
        display_amount(txn, registry).format_with_symbol(currency_symbol),
        registry.resolve_display(&txn.category)
    )
}

/// Format the whole log followed by the running total
pub fn format_transaction_log(summary: &LedgerSummary, currency_symbol: &str) -> String {
    summary.format_terminal(currency_symbol)
}

/// Format just the running total
pub fn format_total(summary: &LedgerSummary, currency_symbol: &str) -> String {
    format!(
        "Összesen: {}",
        summary.total.format_with_symbol(currency_symbol)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    registry: &CategoryRegistry,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        registry.resolve_display(&txn.category)
    ));
    if registry.is_expense_category(&txn.category) {
        output.push_str(&format!(
            "Counted as:  {}\n",
            display_amount(txn, registry).format_with_symbol(currency_symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, CustomCategory};

    fn registry() -> CategoryRegistry {
        CategoryRegistry::new(vec![CustomCategory::new("Ajándék", "🎁").unwrap()])
    }

    #[test]
    fn test_format_row() {
        let txn = Transaction::new("Szülinap", Amount::new(5000.0).unwrap(), "Ajándék");
        assert_eq!(
            format_transaction_row(&txn, &registry(), "Ft"),
            "Szülinap: -5000 Ft (🎁 Ajándék)"
        );
    }

    #[test]
    fn test_format_total() {
        let txn = Transaction::new("Fizetés", Amount::new(1000.0).unwrap(), "bevétel");
        let summary = LedgerSummary::from_parts(&[txn], registry());
        assert_eq!(format_total(&summary, "Ft"), "Összesen: 1000 Ft");
    }

    #[test]
    fn test_format_details() {
        let txn = Transaction::new("Bolt", Amount::new(300.0).unwrap(), "kiadás");
        let output = format_transaction_details(&txn, &registry(), "Ft");
        assert!(output.contains("Amount:      300 Ft"));
        assert!(output.contains("Category:    🛒 Kiadás"));
        assert!(output.contains("Counted as:  -300 Ft"));
    }
}
