//! Custom error types for finwise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::calculators::CalculatorError;
use crate::storage::DataFileError;
use crate::models::category::CategoryParseError;
use crate::models::money::MoneyParseError;
use crate::models::period::PeriodParseError;

/// The main error type for finwise operations
#[derive(Error, Debug)]
pub enum FinwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
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

    /// Loan or investment calculator rejected its inputs
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A data file could not be loaded or saved
    #[error(transparent)]
    DataFile(#[from] DataFileError),
}

impl FinwiseError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for savings goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Savings goal",
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

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for FinwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for FinwiseError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PeriodParseError> for FinwiseError {
    fn from(err: PeriodParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CategoryParseError> for FinwiseError {
    fn from(err: CategoryParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for finwise operations
pub type FinwiseResult<T> = Result<T, FinwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinwiseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinwiseError::budget_not_found("bud-1234abcd");
        assert_eq!(err.to_string(), "Budget not found: bud-1234abcd");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_error() {
        let err = FinwiseError::Duplicate {
            entity_type: "Budget",
            identifier: "food 2025-01".into(),
        };
        assert_eq!(err.to_string(), "Budget already exists: food 2025-01");
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_calculator_error_is_transparent() {
        let err: FinwiseError = CalculatorError::InvalidInput {
            field: "principal",
            reason: "must be greater than zero",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid input for principal: must be greater than zero"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinwiseError = io_err.into();
        assert!(matches!(err, FinwiseError::Io(_)));
    }
}
