//! Transaction service
//!
//! Appends validated transactions to the ledger and exposes the ledger in
//! insertion order. Transactions are never edited or deleted.

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, Transaction, TransactionValidationError};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a transaction
    ///
    /// The description is trimmed and must not be blank; the amount must be
    /// finite. The category identifier is stored as given.
    pub fn add(
        &self,
        description: &str,
        amount: Amount,
        category: &str,
    ) -> TallyResult<Transaction> {
        let transaction = Transaction::new(description.trim(), amount, category);
        self.append(transaction, Operation::Create)
    }

    /// Append a savings withdrawal of `amount` (stored negated)
    pub fn add_savings_withdrawal(&self, amount: Amount) -> TallyResult<Transaction> {
        self.append(Transaction::savings_withdrawal(amount), Operation::Withdraw)
    }

    /// All transactions in insertion order
    pub fn all(&self) -> TallyResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Number of stored transactions
    pub fn count(&self) -> TallyResult<usize> {
        self.storage.transactions.count()
    }

    fn append(&self, transaction: Transaction, operation: Operation) -> TallyResult<Transaction> {
        transaction.validate().map_err(|e| {
            debug!(description = %transaction.description, error = %e, "rejected transaction");
            match e {
                TransactionValidationError::EmptyDescription => TallyError::empty("Description"),
                TransactionValidationError::NonFiniteAmount => {
                    TallyError::Validation(e.to_string())
                }
            }
        })?;

        let position = self.storage.transactions.append(transaction.clone())?;

        // the transaction is already stored; a missing audit line is not fatal
        if let Err(e) = self.storage.log_audit(&AuditEntry::new(
            operation,
            EntityType::Transaction,
            format!("txn-{}", position),
            Some(transaction.description.clone()),
            &transaction,
        )) {
            warn!(position, error = %e, "failed to write audit entry");
        }

        info!(
            position,
            amount = transaction.amount.value(),
            category = %transaction.category,
            "appended transaction"
        );
        Ok(transaction)
    }
}
