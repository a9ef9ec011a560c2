//! Append-only audit log
//!
//! One JSON object per line, flushed after every write. Reading skips blank
//! lines and reports the line number of anything unparseable.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};

use super::entry::AuditEntry;

/// Appends ledger mutations to a JSON-lines file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append the entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> TallyResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| TallyError::Json(format!("Cannot encode audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| io_error("open", e))?;
        file.write_all(format!("{}\n", line).as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| io_error("append to", e))
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> TallyResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TallyResult<Vec<AuditEntry>> {
        let mut window = VecDeque::with_capacity(count.min(256));
        self.for_each_entry(|entry| {
            if count == 0 {
                return;
            }
            if window.len() == count {
                window.pop_front();
            }
            window.push_back(entry);
        })?;
        Ok(window.into_iter().collect())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn for_each_entry(&self, mut visit: impl FnMut(AuditEntry)) -> TallyResult<()> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(io_error("open", e)),
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                TallyError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
            })?;
            visit(entry);
        }
        Ok(())
    }
}

fn io_error(action: &str, e: std::io::Error) -> TallyError {
    TallyError::Io(format!("Cannot {} audit log: {}", action, e))
}
