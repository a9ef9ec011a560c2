//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::{Amount, CategoryRegistry, CustomCategory, Transaction};
use crate::reports::{aggregate_expenses, compute_total, total_magnitude};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Custom categories in insertion order
    pub custom_categories: Vec<CustomCategory>,

    /// All transactions in insertion order
    pub transactions: Vec<Transaction>,

    /// Signed running total at export time
    pub total: Amount,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    /// Number of expense-classified transactions
    pub expense_count: usize,
    /// Sum of expense magnitudes
    pub expense_total: Amount,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> TallyResult<Self> {
        let custom_categories = storage.categories.get_all()?;
        let transactions = storage.transactions.get_all()?;
        Ok(Self::from_parts(custom_categories, transactions))
    }

    pub fn from_parts(
        custom_categories: Vec<CustomCategory>,
        transactions: Vec<Transaction>,
    ) -> Self {
        let registry = CategoryRegistry::new(custom_categories);
        let expenses = aggregate_expenses(&transactions, &registry);

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: registry.custom().len(),
            expense_count: expenses.iter().map(|e| e.count).sum(),
            expense_total: total_magnitude(&expenses),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            total: compute_total(&transactions, &registry),
            custom_categories: registry.custom().to_vec(),
            transactions,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.transaction_count != self.transactions.len() {
            return Err(format!(
                "Metadata lists {} transactions, found {}",
                self.metadata.transaction_count,
                self.transactions.len()
            ));
        }

        if let Some(txn) = self.transactions.iter().find(|t| t.validate().is_err()) {
            return Err(format!("Invalid transaction: {}", txn));
        }

        Ok(())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> TallyResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn read_json_export(json_str: &str) -> TallyResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)?;
    export.validate().map_err(TallyError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> Storage {
        let storage = Storage::in_memory();
        storage
            .categories
            .append(CustomCategory::new("Ajándék", "🎁").unwrap())
            .unwrap();
        storage
            .transactions
            .append(Transaction::new("Fizetés", Amount::new(10000.0).unwrap(), "bevétel"))
            .unwrap();
        storage
            .transactions
            .append(Transaction::new("Szülinap", Amount::new(5000.0).unwrap(), "Ajándék"))
            .unwrap();
        storage
    }

    #[test]
    fn test_full_export() {
        let storage = create_test_storage();
        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.custom_categories.len(), 1);
        assert_eq!(export.transactions.len(), 2);
        assert_eq!(export.total.value(), 5000.0);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.expense_total.value(), 5000.0);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let storage = create_test_storage();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();

        let imported = read_json_export(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.transactions, storage.transactions.get_all().unwrap());
        assert_eq!(imported.custom_categories[0].icon, "🎁");
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let mut export = FullExport::from_parts(vec![], vec![]);
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        assert!(read_json_export(&json).unwrap_err().is_validation());
    }
}
