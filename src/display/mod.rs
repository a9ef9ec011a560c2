//! Display formatting for terminal output
//!
//! Text renderings of the ledger used by the CLI commands.

pub mod category;
pub mod chart;
pub mod transaction;

pub use category::{format_category_details, format_category_list};
pub use chart::format_chart_legend;
pub use transaction::{
    format_total, format_transaction_details, format_transaction_log, format_transaction_row,
};
