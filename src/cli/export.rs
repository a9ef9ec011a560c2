//! CLI command for data export
//!
//! Writes the ledger to a file, or to stdout when no output path is given.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};
use crate::export::{csv, json, yaml, FullExport};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transaction log only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
) -> TallyResult<()> {
    match format {
        ExportFormat::Csv => csv::export_transactions_csv(storage, &mut *writer)?,
        ExportFormat::Json => {
            json::export_full_json(storage, writer, true)?;
            writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;
        }
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer)?,
    }
    writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> TallyResult<()> {
    match output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                TallyError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer)?;

            let count = storage.transactions.count()?;
            println!("Exported {} transactions to: {}", count, output.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer)?;
        }
    }

    Ok(())
}

fn format_from_extension(path: &Path) -> TallyResult<ExportFormat> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(ExportFormat::Json),
        Some("yaml") | Some("yml") => Ok(ExportFormat::Yaml),
        Some("csv") => Ok(ExportFormat::Csv),
        _ => Err(TallyError::Validation(format!(
            "Cannot tell the export format of {}; pass --format",
            path.display()
        ))),
    }
}

/// Read back a full export and check it for consistency
pub fn verify_export(path: &Path, format: Option<ExportFormat>) -> TallyResult<FullExport> {
    let format = match format {
        Some(format) => format,
        None => format_from_extension(path)?,
    };
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TallyError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    match format {
        ExportFormat::Json => json::read_json_export(&contents),
        ExportFormat::Yaml => yaml::read_yaml_export(&contents),
        ExportFormat::Csv => Err(TallyError::Validation(
            "CSV exports hold only the transaction log; verify a JSON or YAML export".into(),
        )),
    }
}

/// Handle the verify command
pub fn handle_verify_command(path: &Path, format: Option<ExportFormat>) -> TallyResult<()> {
    let export = verify_export(path, format)?;

    println!("Export is valid: {}", path.display());
    println!("  Schema version:    {}", export.schema_version);
    println!("  Exported at:       {}", export.exported_at);
    println!("  App version:       {}", export.app_version);
    println!("  Custom categories: {}", export.custom_categories.len());
    println!("  Transactions:      {}", export.transactions.len());
    println!("  Total:             {}", export.total);
    Ok(())
}
