//! Export module for tally
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: the transaction log (spreadsheet-compatible)
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, write_summary_csv};
pub use json::{
    export_full_json, read_json_export, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_full_yaml, read_yaml_export};
