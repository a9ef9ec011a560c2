//! Transaction repository
//!
//! Manages loading and saving the append-only transaction list under the
//! `transactions` key.

use std::sync::{Arc, RwLock};

use crate::error::TallyError;
use crate::models::Transaction;

use super::kv::{load_list, save_list, KeyValueStore, TRANSACTIONS_KEY};

/// Repository for transaction persistence
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from the store
    pub fn load(&self) -> Result<(), TallyError> {
        let loaded: Vec<Transaction> = load_list(self.store.as_ref(), TRANSACTIONS_KEY)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;

        Ok(())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Append a transaction, persist the list and return its position
    ///
    /// The in-memory list only keeps the transaction once the store accepted
    /// the write.
    pub fn append(&self, transaction: Transaction) -> Result<usize, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(transaction);
        if let Err(e) = save_list(self.store.as_ref(), TRANSACTIONS_KEY, &data) {
            data.pop();
            return Err(e);
        }
        Ok(data.len() - 1)
    }

    /// Poison the lock so every later access fails
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.data.write();
            panic!("poisoning transaction lock");
        }));
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use crate::storage::kv::{FailingStore, FileStore, MemoryStore};
    use tempfile::TempDir;

    fn txn(description: &str, amount: f64, category: &str) -> Transaction {
        Transaction::new(description, Amount::new(amount).unwrap(), category)
    }

    #[test]
    fn test_empty_load() {
        let repo = TransactionRepository::new(Arc::new(MemoryStore::new()));
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_push_returns_position() {
        let repo = TransactionRepository::new(Arc::new(MemoryStore::new()));
        assert_eq!(repo.append(txn("Fizetés", 250000.0, "bevétel")).unwrap(), 0);
        assert_eq!(repo.append(txn("Bolt", 4200.0, "kiadás")).unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(temp_dir.path().to_path_buf()));

        let repo = TransactionRepository::new(store.clone());
        repo.load().unwrap();
        repo.append(txn("Fizetés", 250000.0, "bevétel")).unwrap();
        repo.append(txn("Bolt", 4200.5, "kiadás")).unwrap();
        repo.append(txn("Visszatérítés", -300.0, "kiadás")).unwrap();

        let repo2 = TransactionRepository::new(store);
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), repo.get_all().unwrap());
    }

    #[test]
    fn test_failed_write_keeps_list_unchanged() {
        let repo = TransactionRepository::new(Arc::new(FailingStore));

        assert!(repo.append(txn("Bolt", 10.0, "kiadás")).is_err());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_reads_original_layout() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                TRANSACTIONS_KEY,
                r#"[{"description":"Szülinap","amount":5000,"category":"Ajándék"}]"#,
            )
            .unwrap();

        let repo = TransactionRepository::new(store);
        repo.load().unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount.value(), 5000.0);
        assert_eq!(all[0].category, "Ajándék");
    }
}
