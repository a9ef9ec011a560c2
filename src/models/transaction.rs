//! Transaction model
//!
//! A transaction is an append-only ledger record: a description, a signed
//! amount and the identifier of its category. Records are never edited or
//! deleted once stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::SAVINGS;

/// Description used for savings withdrawals
pub const SAVINGS_WITHDRAWAL_DESCRIPTION: &str = "💸 Megtakarítás kivonása";

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// What the money was for
    pub description: String,

    /// Signed amount as entered; expense classification overrides the sign
    /// when displaying and summing
    pub amount: Amount,

    /// Category identifier (built-in value or custom category name)
    pub category: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// A withdrawal from savings: the amount is negated and filed under savings
    pub fn savings_withdrawal(amount: Amount) -> Self {
        Self::new(SAVINGS_WITHDRAWAL_DESCRIPTION, -amount, SAVINGS)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.description, self.amount, self.category)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonFiniteAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
