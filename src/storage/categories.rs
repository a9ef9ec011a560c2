//! Custom category repository
//!
//! Manages loading and saving custom categories under the
//! `customCategories` key.

use std::sync::{Arc, RwLock};

use crate::error::TallyError;
use crate::models::{CategoryRegistry, CustomCategory};

use super::kv::{load_list, save_list, KeyValueStore, CUSTOM_CATEGORIES_KEY};

/// Repository for custom category persistence
pub struct CategoryRepository {
    store: Arc<dyn KeyValueStore>,
    categories: RwLock<Vec<CustomCategory>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load custom categories from the store
    pub fn load(&self) -> Result<(), TallyError> {
        let loaded: Vec<CustomCategory> = load_list(self.store.as_ref(), CUSTOM_CATEGORIES_KEY)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *categories = loaded;

        Ok(())
    }

    /// Get all custom categories in insertion order
    pub fn get_all(&self) -> Result<Vec<CustomCategory>, TallyError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Snapshot of built-ins plus the current custom categories
    pub fn registry(&self) -> Result<CategoryRegistry, TallyError> {
        Ok(CategoryRegistry::new(self.get_all()?))
    }

    /// Append a validated category and persist the list
    ///
    /// Nothing changes in memory if the store rejects the write.
    pub fn append(&self, category: CustomCategory) -> Result<(), TallyError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.push(category);
        save_list(self.store.as_ref(), CUSTOM_CATEGORIES_KEY, &categories).map_err(|e| {
            categories.pop();
            e
        })
    }

    /// Count custom categories
    pub fn count(&self) -> Result<usize, TallyError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}
