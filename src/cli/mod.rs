//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod export;
pub mod period;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, handle_verify_command, ExportFormat};
pub use period::handle_period_command;
pub use report::{handle_chart_command, handle_total_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
