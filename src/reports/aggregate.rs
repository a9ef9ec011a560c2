//! Expense aggregation and the running total
//!
//! Pure functions over a transaction slice and an [`ExpenseClassifier`].
//! Expense-classified transactions always count as `-|amount|`, whatever
//! sign was stored.

use std::collections::HashMap;

use crate::models::{Amount, ExpenseClassifier, Transaction};

/// Summed expense magnitude for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category identifier as stored on the transactions
    pub category: String,
    /// Sum of absolute amounts, never negative
    pub magnitude: Amount,
    /// Number of transactions folded into this total
    pub count: usize,
}

/// Sum `|amount|` of expense transactions per category, in first-seen order
pub fn aggregate_expenses<C>(transactions: &[Transaction], classifier: &C) -> Vec<CategoryTotal>
where
    C: ExpenseClassifier + ?Sized,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for txn in transactions
        .iter()
        .filter(|t| classifier.is_expense_category(&t.category))
    {
        match positions.get(txn.category.as_str()) {
            Some(&i) => {
                totals[i].magnitude += txn.amount.abs();
                totals[i].count += 1;
            }
            None => {
                positions.insert(txn.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    magnitude: txn.amount.abs(),
                    count: 1,
                });
            }
        }
    }

    totals
}

/// Sum of all magnitudes in an aggregation
pub fn total_magnitude(totals: &[CategoryTotal]) -> Amount {
    totals
        .iter()
        .fold(Amount::zero(), |sum, t| sum + t.magnitude)
}

/// Amount as shown in the ledger: `-|amount|` for expenses, raw otherwise
pub fn display_amount<C>(transaction: &Transaction, classifier: &C) -> Amount
where
    C: ExpenseClassifier + ?Sized,
{
    if classifier.is_expense_category(&transaction.category) {
        -transaction.amount.abs()
    } else {
        transaction.amount
    }
}

/// Signed net balance across all transactions
pub fn compute_total<C>(transactions: &[Transaction], classifier: &C) -> Amount
where
    C: ExpenseClassifier + ?Sized,
{
    transactions
        .iter()
        .fold(Amount::zero(), |total, t| total + display_amount(t, classifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRegistry;
    use crate::reports::{layout, ChartGeometry};

    fn txn(description: &str, amount: f64, category: &str) -> Transaction {
        Transaction::new(description, Amount::new(amount).unwrap(), category)
    }

    fn registry() -> CategoryRegistry {
        let mut registry = CategoryRegistry::default();
        registry.add("Ajándék", "🎁").unwrap();
        registry.add("Rezsi", "💡").unwrap();
        registry
    }

    #[test]
    fn test_single_expense_total_is_negative_magnitude() {
        let registry = registry();
        for a in [5000.0, -5000.0, 0.5, 0.0] {
            let total = compute_total(&[txn("x", a, "kiadás")], &registry);
            assert_eq!(total.value(), -f64::abs(a));
        }
    }

    #[test]
    fn test_single_non_expense_total_is_raw_amount() {
        let registry = registry();
        for a in [5000.0, -5000.0, 12.25] {
            assert_eq!(compute_total(&[txn("x", a, "bevétel")], &registry).value(), a);
            assert_eq!(compute_total(&[txn("x", a, "megtakarítás")], &registry).value(), a);
        }
    }

    #[test]
    fn test_custom_category_scenario() {
        let mut registry = CategoryRegistry::default();
        registry.add("Ajándék", "🎁").unwrap();
        let transactions = vec![txn("Szülinap", 5000.0, "Ajándék")];

        assert!(registry.is_expense_category("Ajándék"));
        assert_eq!(compute_total(&transactions, &registry).value(), -5000.0);
    }

    #[test]
    fn test_mixed_total() {
        let registry = registry();
        let transactions = vec![
            txn("Fizetés", 300000.0, "bevétel"),
            txn("Bolt", -12000.0, "kiadás"),
            txn("Villany", 8000.0, "Rezsi"),
            txn("Félretett", 50000.0, "megtakarítás"),
            txn("💸 Megtakarítás kivonása", -10000.0, "megtakarítás"),
        ];

        let total = compute_total(&transactions, &registry);
        assert_eq!(total.value(), 300000.0 - 12000.0 - 8000.0 + 50000.0 - 10000.0);
    }

    #[test]
    fn test_empty_ledger() {
        let registry = registry();
        assert!(aggregate_expenses(&[], &registry).is_empty());
        assert_eq!(compute_total(&[], &registry).value(), 0.0);
    }

    #[test]
    fn test_aggregation_first_seen_order() {
        let registry = registry();
        let transactions = vec![
            txn("Villany", 8000.0, "Rezsi"),
            txn("Fizetés", 300000.0, "bevétel"),
            txn("Bolt", 1000.0, "kiadás"),
            txn("Gáz", -2000.0, "Rezsi"),
            txn("Virág", 3000.0, "Ajándék"),
        ];

        let totals = aggregate_expenses(&transactions, &registry);
        let view: Vec<_> = totals
            .iter()
            .map(|t| (t.category.as_str(), t.magnitude.value(), t.count))
            .collect();

        assert_eq!(
            view,
            vec![
                ("Rezsi", 10000.0, 2),
                ("kiadás", 1000.0, 1),
                ("Ajándék", 3000.0, 1)
            ]
        );
        assert_eq!(total_magnitude(&totals).value(), 14000.0);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let registry = registry();
        let transactions = vec![
            txn("a", 1.5, "Rezsi"),
            txn("b", 2.0, "kiadás"),
            txn("c", 3.0, "Rezsi"),
        ];

        let first = aggregate_expenses(&transactions, &registry);
        let second = aggregate_expenses(&transactions, &registry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_amount() {
        let registry = registry();
        assert_eq!(display_amount(&txn("a", 100.0, "kiadás"), &registry).value(), -100.0);
        assert_eq!(display_amount(&txn("a", -100.0, "bevétel"), &registry).value(), -100.0);
        assert_eq!(display_amount(&txn("a", 100.0, "bevétel"), &registry).value(), 100.0);
    }

    #[test]
    fn test_overflowing_expenses_keep_total_and_chart() {
        let registry = registry();
        let transactions = vec![txn("a", 1e308, "kiadás"), txn("b", 1e308, "kiadás")];

        let total = compute_total(&transactions, &registry);
        assert_eq!(total.value(), -f64::MAX);
        assert_eq!(total.format_with_symbol("Ft"), format!("{} Ft", -f64::MAX));

        let totals = aggregate_expenses(&transactions, &registry);
        assert_eq!(totals[0].magnitude.value(), f64::MAX);

        let chart = layout(&totals, &ChartGeometry::new(200.0, 200.0, 180.0));
        assert!(!chart.is_empty());
        assert_eq!(chart.sectors().len(), 1);
    }

    #[test]
    fn test_works_with_closure_classifier() {
        let transactions = vec![txn("a", 10.0, "food"), txn("b", 5.0, "rent")];
        let totals = aggregate_expenses(&transactions, &|c: &str| c == "food");
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "food");
    }
}
