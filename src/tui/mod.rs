//! Terminal User Interface module
//!
//! A single-screen dashboard built on ratatui: the month header, the
//! transaction log with its running total, the expense pie chart, and modal
//! forms for data entry.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
