//! Custom error types for expense-desk
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense-desk operations
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

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid approval-workflow transition
    #[error("Approval error: {0}")]
    Approval(String),

    /// Expense dated outside the allowed backdating window
    #[error("Expense date {date} is outside the {days}-day grace window")]
    GraceWindow { date: String, days: u32 },

    /// Settlement errors
    #[error("Settlement error: {0}")]
    Settlement(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expense types
    pub fn expense_type_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense type",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for advances
    pub fn advance_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Advance",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for expense types
    pub fn duplicate_expense_type(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Expense type",
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

// Implement From traits for common error types

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

impl From<serde_yaml::Error> for ExpenseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for expense-desk operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_type_not_found("Travel - Bike");
        assert_eq!(err.to_string(), "Expense type not found: Travel - Bike");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_grace_window_error() {
        let err = ExpenseError::GraceWindow {
            date: "2025-01-02".into(),
            days: 5,
        };
        assert_eq!(
            err.to_string(),
            "Expense date 2025-01-02 is outside the 5-day grace window"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let expense_err: ExpenseError = io_err.into();
        assert!(matches!(expense_err, ExpenseError::Io(_)));
    }
}
