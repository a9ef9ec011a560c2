//! Category models and the category registry
//!
//! There are two kinds of categories: the three fixed built-ins (income,
//! expense, savings) and user-defined custom categories carrying a name and
//! an icon. Transactions refer to a category by a plain string identifier,
//! which [`CategoryRegistry::resolve`] turns into a [`CategoryRef`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TallyError, TallyResult};

/// Identifier of the built-in income category
pub const INCOME: &str = "bevétel";
/// Identifier of the built-in expense category
pub const EXPENSE: &str = "kiadás";
/// Identifier of the built-in savings category
pub const SAVINGS: &str = "megtakarítás";

/// The fixed, immutable built-in categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInCategory {
    Income,
    Expense,
    Savings,
}

impl BuiltInCategory {
    /// All built-ins in picker order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense, Self::Savings]
    }

    /// The stored identifier
    pub fn value(&self) -> &'static str {
        match self {
            Self::Income => INCOME,
            Self::Expense => EXPENSE,
            Self::Savings => SAVINGS,
        }
    }

    /// The display label, icon included
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "💰 Bevétel",
            Self::Expense => "🛒 Kiadás",
            Self::Savings => "🏦 Megtakarítás",
        }
    }

    /// Look up a built-in by exact identifier
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.value() == value)
    }
}

impl fmt::Display for BuiltInCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCategory {
    /// Category name, also its identifier
    pub name: String,
    /// Icon shown before the name (usually an emoji)
    pub icon: String,
}

impl CustomCategory {
    /// Create a custom category from trimmed, non-blank name and icon
    pub fn new(name: &str, icon: &str) -> TallyResult<Self> {
        let name = name.trim();
        let icon = icon.trim();

        if name.is_empty() {
            return Err(TallyError::empty("Category name"));
        }
        if icon.is_empty() {
            return Err(TallyError::empty("Category icon"));
        }

        Ok(Self {
            name: name.to_string(),
            icon: icon.to_string(),
        })
    }

    /// "{icon} {name}"
    pub fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

impl fmt::Display for CustomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// A resolved category identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRef {
    BuiltIn(BuiltInCategory),
    Custom(CustomCategory),
    /// Identifier matching neither set; shown verbatim
    Unknown(String),
}

impl CategoryRef {
    /// Label shown in transaction lists
    pub fn display_label(&self) -> String {
        match self {
            Self::BuiltIn(builtin) => builtin.label().to_string(),
            Self::Custom(custom) => custom.display_label(),
            Self::Unknown(raw) => raw.clone(),
        }
    }

    /// Expense classification: the built-in expense and every custom category
    pub fn is_expense(&self) -> bool {
        matches!(
            self,
            Self::BuiltIn(BuiltInCategory::Expense) | Self::Custom(_)
        )
    }
}

/// One selectable category: stored value plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub built_in: bool,
}

/// Decides whether a category identifier counts as an expense
pub trait ExpenseClassifier {
    fn is_expense_category(&self, category: &str) -> bool;
}

impl<F> ExpenseClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_expense_category(&self, category: &str) -> bool {
        self(category)
    }
}

/// Built-in categories plus the user's custom categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    custom: Vec<CustomCategory>,
}

impl CategoryRegistry {
    pub fn new(custom: Vec<CustomCategory>) -> Self {
        Self { custom }
    }

    /// Custom categories in insertion order
    pub fn custom(&self) -> &[CustomCategory] {
        &self.custom
    }

    /// Case-insensitive lookup against built-in values and custom names
    pub fn contains(&self, name: &str) -> bool {
        let lower = name.trim().to_lowercase();
        BuiltInCategory::all().iter().any(|b| b.value() == lower)
            || self.custom.iter().any(|c| c.name.to_lowercase() == lower)
    }

    /// Validate a new custom category without adding it
    pub fn validate_new(&self, name: &str, icon: &str) -> TallyResult<CustomCategory> {
        let category = CustomCategory::new(name, icon)?;
        if self.contains(&category.name) {
            return Err(TallyError::duplicate_category(category.name));
        }
        Ok(category)
    }

    /// Validate and append a new custom category
    pub fn add(&mut self, name: &str, icon: &str) -> TallyResult<CustomCategory> {
        let category = self.validate_new(name, icon)?;
        self.custom.push(category.clone());
        Ok(category)
    }

    /// Resolve an identifier: custom names first, then built-in values
    pub fn resolve(&self, identifier: &str) -> CategoryRef {
        if let Some(custom) = self.custom.iter().find(|c| c.name == identifier) {
            return CategoryRef::Custom(custom.clone());
        }
        match BuiltInCategory::from_value(identifier) {
            Some(builtin) => CategoryRef::BuiltIn(builtin),
            None => CategoryRef::Unknown(identifier.to_string()),
        }
    }

    /// Display label for an identifier, falling back to the raw identifier
    pub fn resolve_display(&self, identifier: &str) -> String {
        self.resolve(identifier).display_label()
    }

    /// Picker options: built-ins first, then customs
    pub fn options(&self) -> Vec<CategoryOption> {
        let built_ins = BuiltInCategory::all().iter().map(|b| CategoryOption {
            value: b.value().to_string(),
            label: b.label().to_string(),
            built_in: true,
        });
        let customs = self.custom.iter().map(|c| CategoryOption {
            value: c.name.clone(),
            label: c.display_label(),
            built_in: false,
        });
        built_ins.chain(customs).collect()
    }
}

impl ExpenseClassifier for CategoryRegistry {
    fn is_expense_category(&self, category: &str) -> bool {
        category == EXPENSE || self.custom.iter().any(|c| c.name == category)
    }
}
