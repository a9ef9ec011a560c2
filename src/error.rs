//! Custom error types for tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// A required text field was blank after trimming
    #[error("{field} cannot be empty")]
    EmptyInput { field: &'static str },

    /// Case-insensitive name collision
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Non-numeric or non-finite amounts and other invalid input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TallyError {
    /// Create an "empty input" error for the named field
    pub fn empty(field: &'static str) -> Self {
        Self::EmptyInput { field }
    }

    /// Create a "duplicate" error for categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is an input validation failure of any kind
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. } | Self::Duplicate { .. } | Self::Validation(_)
        )
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;
