//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors (settings, audit log)
    #[error("JSON error: {0}")]
    Json(String),

    /// Missing required fields or an update that changes nothing
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed numbers or stored records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for ExpenseError {
    fn from(err: MoneyParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
