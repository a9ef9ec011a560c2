//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TallyResult<()> {
    let export = FullExport::from_storage(storage)?;
    let io_err = |e: std::io::Error| TallyError::Export(e.to_string());

    writeln!(writer, "# tally ledger export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn read_yaml_export(yaml_str: &str) -> TallyResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| TallyError::Export(e.to_string()))?;
    export.validate().map_err(TallyError::Validation)?;
    Ok(export)
}
