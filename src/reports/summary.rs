//! Ledger summary
//!
//! Resolves every transaction against the category registry once, so the
//! views and exporters share the same labels, signs and totals.

use crate::error::TallyResult;
use crate::models::{Amount, CategoryRegistry, ExpenseClassifier, Transaction};
use crate::storage::Storage;

use super::aggregate::{aggregate_expenses, compute_total, display_amount, CategoryTotal};
use super::chart::{layout, ChartGeometry, PieChart};

/// A transaction as it appears in the log
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerLine {
    pub description: String,
    /// Stored amount
    pub amount: Amount,
    /// Amount after expense sign normalization
    pub display_amount: Amount,
    /// Stored category identifier
    pub category: String,
    pub category_label: String,
    pub is_expense: bool,
}

impl LedgerLine {
    /// "{description}: {amount} {symbol} ({label})"
    pub fn format(&self, currency_symbol: &str) -> String {
        format!(
            "{}: {} ({})",
            self.description,
            self.display_amount.format_with_symbol(currency_symbol),
            self.category_label
        )
    }
}

/// Everything the views render: log lines, running total and expense breakdown
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub lines: Vec<LedgerLine>,
    pub total: Amount,
    pub expenses: Vec<CategoryTotal>,
    registry: CategoryRegistry,
}

impl LedgerSummary {
    /// Build from the loaded storage
    pub fn generate(storage: &Storage) -> TallyResult<Self> {
        let registry = storage.categories.registry()?;
        let transactions = storage.transactions.get_all()?;
        Ok(Self::from_parts(&transactions, registry))
    }

    pub fn from_parts(transactions: &[Transaction], registry: CategoryRegistry) -> Self {
        let lines = transactions
            .iter()
            .map(|txn| LedgerLine {
                description: txn.description.clone(),
                amount: txn.amount,
                display_amount: display_amount(txn, &registry),
                category: txn.category.clone(),
                category_label: registry.resolve_display(&txn.category),
                is_expense: registry.is_expense_category(&txn.category),
            })
            .collect();

        Self {
            lines,
            total: compute_total(transactions, &registry),
            expenses: aggregate_expenses(transactions, &registry),
            registry,
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lay out the expense pie for the given geometry
    pub fn chart(&self, geometry: &ChartGeometry) -> PieChart {
        layout(&self.expenses, geometry)
    }

    /// Display label for an aggregation entry
    pub fn label_for(&self, category: &str) -> String {
        self.registry.resolve_display(category)
    }

    /// Plain-text rendering for the terminal
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        if self.lines.is_empty() {
            output.push_str("No transactions yet.\n");
        }
        for line in &self.lines {
            output.push_str(&line.format(currency_symbol));
            output.push('\n');
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Összesen: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));
        output
    }
}
