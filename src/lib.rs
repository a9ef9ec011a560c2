//! tally - Terminal personal finance ledger
//!
//! This library provides the core functionality for the tally application:
//! an append-only log of income, expense and savings transactions with
//! user-defined expense categories, a running total and a pie chart of
//! expenses by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, categories, transactions, period)
//! - `storage`: JSON key-value storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregation, running total and chart layout
//! - `audit`: Audit logging system
//! - `display`, `export`: Text rendering and data export
//! - `cli`, `tui`: Command handlers and the interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::TallyError;
