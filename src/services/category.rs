//! Category service
//!
//! Business logic for the category registry: creating custom categories,
//! resolving identifiers to display labels and classifying expenses.

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::TallyResult;
use crate::models::{CategoryRef, CategoryRegistry, CustomCategory, ExpenseClassifier};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Snapshot of built-in and custom categories
    pub fn registry(&self) -> TallyResult<CategoryRegistry> {
        self.storage.categories.registry()
    }

    /// Create a custom category
    ///
    /// Fails with `EmptyInput` if the trimmed name or icon is blank and with
    /// `Duplicate` if the name matches a built-in or custom category,
    /// ignoring case. Nothing is stored on failure.
    pub fn add_category(&self, name: &str, icon: &str) -> TallyResult<CustomCategory> {
        let registry = self.registry()?;
        let category = registry.validate_new(name, icon).map_err(|e| {
            debug!(category = name, error = %e, "rejected custom category");
            e
        })?;

        self.storage.categories.append(category.clone())?;

        if let Err(e) = self.storage.log_audit(&AuditEntry::new(
            Operation::Create,
            EntityType::Category,
            category.name.clone(),
            Some(category.display_label()),
            &category,
        )) {
            warn!(category = %category.name, error = %e, "failed to write audit entry");
        }

        info!(category = %category.name, icon = %category.icon, "created custom category");
        Ok(category)
    }

    /// Resolve an identifier to a built-in, custom or unknown category
    pub fn resolve(&self, identifier: &str) -> TallyResult<CategoryRef> {
        Ok(self.registry()?.resolve(identifier))
    }

    /// Display label for an identifier
    pub fn resolve_display(&self, identifier: &str) -> TallyResult<String> {
        Ok(self.registry()?.resolve_display(identifier))
    }

    /// Whether transactions in this category count as expenses
    pub fn is_expense_category(&self, identifier: &str) -> TallyResult<bool> {
        Ok(self.registry()?.is_expense_category(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::error::TallyError;
    use crate::storage::kv::FailingStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_add_category_persists() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);

        let created = service.add_category(" Ajándék ", "🎁").unwrap();
        assert_eq!(created.name, "Ajándék");
        assert_eq!(storage.categories.count().unwrap(), 1);

        // reload from the store to prove it was saved
        storage.categories.load().unwrap();
        assert_eq!(storage.categories.get_all().unwrap(), vec![created]);
    }

    #[test]
    fn test_failures_leave_state_unchanged() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);
        service.add_category("Ajándék", "🎁").unwrap();

        assert!(matches!(
            service.add_category("", "🎁"),
            Err(TallyError::EmptyInput { .. })
        ));
        assert!(matches!(
            service.add_category("Rezsi", "  "),
            Err(TallyError::EmptyInput { .. })
        ));
        assert!(service.add_category("AJÁNDÉK", "🎀").unwrap_err().is_duplicate());
        assert!(service.add_category("Megtakarítás", "🏦").unwrap_err().is_duplicate());

        assert_eq!(storage.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_failed_save_allows_retry() {
        let storage = Storage::with_store(Arc::new(FailingStore));
        let service = CategoryService::new(&storage);

        assert!(matches!(
            service.add_category("Ajándék", "🎁"),
            Err(TallyError::Storage(_))
        ));
        assert!(service.registry().unwrap().custom().is_empty());
        assert!(!service.is_expense_category("Ajándék").unwrap());

        // a retry hits the store again instead of reporting a duplicate
        let retry = service.add_category("Ajándék", "🎁").unwrap_err();
        assert!(!retry.is_duplicate());
    }

    #[test]
    fn test_resolution_and_classification() {
        let storage = Storage::in_memory();
        let service = CategoryService::new(&storage);
        service.add_category("Ajándék", "🎁").unwrap();

        assert_eq!(service.resolve_display("Ajándék").unwrap(), "🎁 Ajándék");
        assert_eq!(service.resolve_display("kiadás").unwrap(), "🛒 Kiadás");
        assert!(service.is_expense_category("Ajándék").unwrap());
        assert!(!service.is_expense_category("bevétel").unwrap());
        assert!(matches!(
            service.resolve("valami").unwrap(),
            CategoryRef::Unknown(_)
        ));
    }

    #[test]
    fn test_add_category_writes_audit_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let service = CategoryService::new(&storage);

        service.add_category("Ajándék", "🎁").unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Category);
        assert_eq!(entries[0].entity_id, "Ajándék");
    }
}
