//! Core data models for tally
//!
//! This module contains the data structures of the ledger domain: amounts,
//! categories, transactions and the month cursor.

pub mod amount;
pub mod category;
pub mod period;
pub mod transaction;

pub use amount::Amount;
pub use category::{
    BuiltInCategory, CategoryOption, CategoryRef, CategoryRegistry, CustomCategory,
    ExpenseClassifier,
};
pub use period::PeriodCursor;
pub use transaction::{Transaction, TransactionValidationError};
