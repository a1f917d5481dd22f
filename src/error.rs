//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
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

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted record could not be decoded (e.g. a malformed password hash)
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// The runtime environment could not provide a required capability,
    /// such as secure randomness
    #[error("Environment failure: {0}")]
    EnvironmentFailure(String),

    /// Unknown username or wrong password; deliberately indistinguishable
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl BudgetError {
    /// Create a "duplicate" error for users
    pub fn duplicate_user(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
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

    /// Check if this error means a stored record is unreadable
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption(_))
    }

    /// Check if this is a failed login
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_duplicate_user_error() {
        let err = BudgetError::duplicate_user("alice");
        assert_eq!(err.to_string(), "User already exists: alice");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = BudgetError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(err.is_invalid_credentials());
    }

    #[test]
    fn test_data_corruption_predicate() {
        let err = BudgetError::DataCorruption("stored hash is 40 bytes".into());
        assert!(err.is_data_corruption());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
