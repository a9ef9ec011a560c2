//! Category display formatting
//!
//! Formats the category picker options as a table and a single category as
//! a detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategoryRef, CategoryRegistry, ExpenseClassifier};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Identifier")]
    value: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Expense")]
    expense: &'static str,
}

/// Format the picker options of a registry as a table
pub fn format_category_list(registry: &CategoryRegistry) -> String {
    let rows = registry.options().into_iter().map(|option| CategoryRow {
        expense: if registry.is_expense_category(&option.value) {
            "yes"
        } else {
            "no"
        },
        kind: if option.built_in { "built-in" } else { "custom" },
        label: option.label,
        value: option.value,
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a resolved category
pub fn format_category_details(identifier: &str, category: &CategoryRef) -> String {
    let kind = match category {
        CategoryRef::BuiltIn(_) => "built-in",
        CategoryRef::Custom(_) => "custom",
        CategoryRef::Unknown(_) => "unknown",
    };

    let mut output = String::new();
    output.push_str(&format!("Identifier: {}\n", identifier));
    output.push_str(&format!("Label:      {}\n", category.display_label()));
    output.push_str(&format!("Kind:       {}\n", kind));
    output.push_str(&format!(
        "Expense:    {}\n",
        if category.is_expense() { "yes" } else { "no" }
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuiltInCategory, CategoryRegistry, CustomCategory};

    #[test]
    fn test_category_list_contains_all_options() {
        let registry = CategoryRegistry::new(vec![CustomCategory::new("Ajándék", "🎁").unwrap()]);
        let output = format_category_list(&registry);

        assert!(output.contains("💰 Bevétel"));
        assert!(output.contains("🏦 Megtakarítás"));
        assert!(output.contains("🎁 Ajándék"));
        assert!(output.contains("custom"));
    }

    #[test]
    fn test_details() {
        let output =
            format_category_details("kiadás", &CategoryRef::BuiltIn(BuiltInCategory::Expense));
        assert!(output.contains("Label:      🛒 Kiadás"));
        assert!(output.contains("Expense:    yes"));

        let output = format_category_details("x", &CategoryRef::Unknown("x".into()));
        assert!(output.contains("Kind:       unknown"));
        assert!(output.contains("Expense:    no"));
    }
}
