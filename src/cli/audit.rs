//! Audit log CLI command

use crate::error::{TallyError, TallyResult};
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> TallyResult<()> {
    let logger = storage
        .audit()
        .ok_or_else(|| TallyError::Config("Audit log is not available".into()))?;

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
