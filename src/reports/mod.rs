//! Reports module for tally
//!
//! Pure computations over the ledger: the running total, the expense
//! breakdown per category and the pie chart layout built from it.

pub mod aggregate;
pub mod chart;
pub mod summary;

pub use aggregate::{
    aggregate_expenses, compute_total, display_amount, total_magnitude, CategoryTotal,
};
pub use chart::{layout, ChartGeometry, PieChart, SectorDescriptor, NO_DATA_MESSAGE};
pub use summary::{LedgerLine, LedgerSummary};
