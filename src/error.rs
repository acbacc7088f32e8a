//! Custom error types for the expense dashboard
//!
//! The analytics engine itself is total and never fails. Errors only come from
//! the input boundary (adding an expense, parsing filters) and from the outer
//! layers: configuration, storage and export.

use thiserror::Error;

/// The main error type for expense dashboard operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

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

/// Result type alias for expense dashboard operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("bad currency".into());
        assert_eq!(err.to_string(), "Configuration error: bad currency");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_not_found("exp-1a2b3c4d");
        assert_eq!(err.to_string(), "Expense not found: exp-1a2b3c4d");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error() {
        let err = ExpenseError::Validation("Description cannot be empty".into());
        assert_eq!(err.to_string(), "Validation error: Description cannot be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
