//! String-keyed key-value store
//!
//! Every persisted collection is stored under a fixed key as a JSON-encoded
//! string. A missing key means an empty collection.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TallyError;

use super::file_io::{read_optional, write_atomic};

/// Key holding the custom categories
pub const CUSTOM_CATEGORIES_KEY: &str = "customCategories";
/// Key holding the transactions
pub const TRANSACTIONS_KEY: &str = "transactions";

/// A string-keyed store of string values
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TallyError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TallyError>;
}

/// Read a JSON array stored under `key`; an absent key yields an empty list
pub fn load_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, TallyError> {
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) if raw.trim().is_empty() || raw.trim() == "null" => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| TallyError::Storage(format!("Failed to parse '{}': {}", key, e))),
    }
}

/// Store `items` as a JSON array under `key`
pub fn save_list<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), TallyError> {
    let raw = serde_json::to_string(items)
        .map_err(|e| TallyError::Storage(format!("Failed to serialize '{}': {}", key, e)))?;
    store.set(key, &raw)
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, TallyError> {
        read_optional(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TallyError> {
        write_atomic(self.path_for(key), value.as_bytes())
    }
}

/// Volatile store used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, TallyError> {
        let values = self
            .values
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TallyError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that rejects every write, for exercising failed saves
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, TallyError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), TallyError> {
        Err(TallyError::Storage(format!("'{}' is read-only", key)))
    }
}
