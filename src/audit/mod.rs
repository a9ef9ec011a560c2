//! Audit logging system for tally
//!
//! Records every ledger mutation (new categories, new transactions and
//! savings withdrawals) in an append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information and the stored record.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
