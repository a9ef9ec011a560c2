//! Storage layer for tally
//!
//! Persists the ledger in a string-keyed JSON key-value store (one file per
//! key, written atomically) and records mutations in the audit log.

pub mod categories;
pub mod file_io;
pub mod kv;
pub mod transactions;

pub use categories::CategoryRepository;
pub use kv::{FileStore, KeyValueStore, MemoryStore, CUSTOM_CATEGORIES_KEY, TRANSACTIONS_KEY};
pub use transactions::TransactionRepository;

use std::sync::Arc;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create file-backed storage under the configured data directory
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(paths.data_dir()));
        let mut storage = Self::with_store(store);
        storage.audit = Some(AuditLogger::new(paths.audit_log()));

        Ok(storage)
    }

    /// Create storage over an arbitrary store, without audit logging
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            categories: CategoryRepository::new(store.clone()),
            transactions: TransactionRepository::new(store),
            audit: None,
        }
    }

    /// Volatile storage for tests
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Get the audit logger, if file-backed
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from the store
    pub fn load_all(&mut self) -> Result<(), TallyError> {
        self.categories.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Record a mutation in the audit log (no-op without one)
    pub fn log_audit(&self, entry: &AuditEntry) -> Result<(), TallyError> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, CustomCategory, Transaction};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_in_memory_has_no_audit() {
        let storage = Storage::in_memory();
        assert!(storage.audit().is_none());
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        storage
            .categories
            .append(CustomCategory::new("Ajándék", "🎁").unwrap())
            .unwrap();
        storage
            .transactions
            .append(Transaction::new("Szülinap", Amount::new(5000.0).unwrap(), "Ajándék"))
            .unwrap();

        assert!(paths.data_dir().join("customCategories.json").exists());
        assert!(paths.data_dir().join("transactions.json").exists());

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(
            reloaded.categories.get_all().unwrap(),
            storage.categories.get_all().unwrap()
        );
        assert_eq!(
            reloaded.transactions.get_all().unwrap(),
            storage.transactions.get_all().unwrap()
        );
    }
}
