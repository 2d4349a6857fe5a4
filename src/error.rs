//! Custom error types for finman
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finman operations
#[derive(Error, Debug)]
pub enum FinmanError {
    /// A user-supplied field could not be parsed or failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The database could not be opened, read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl FinmanError {
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

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// Implement From traits for common error types

impl From<rusqlite::Error> for FinmanError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for FinmanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinmanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finman operations
pub type FinmanResult<T> = Result<T, FinmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinmanError::InvalidInput("Invalid income value: 'abc'".into());
        assert_eq!(err.to_string(), "Invalid input: Invalid income value: 'abc'");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_not_found_error() {
        let err = FinmanError::expense_not_found("exp-42");
        assert_eq!(err.to_string(), "Expense not found: exp-42");
        assert!(err.is_not_found());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_sqlite_error() {
        let err: FinmanError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, FinmanError::StorageUnavailable(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let finman_err: FinmanError = io_err.into();
        assert!(matches!(finman_err, FinmanError::Io(_)));
    }
}
