//! Custom error types for reimburse-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for reimburse-cli operations
#[derive(Error, Debug)]
pub enum ReimburseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A description is listed as both joint and personal in the rule table
    #[error("Configuration error: '{description}' is listed as both joint and personal")]
    ConflictingRule { description: String },

    /// Selection state could not be paired with the unknown transactions
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReimburseError {
    /// Create a "not found" error for files the run depends on
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Create a conflicting rule error
    pub fn conflicting_rule(description: impl Into<String>) -> Self {
        Self::ConflictingRule {
            description: description.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error comes from bad configuration or rule data
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_) | Self::ConflictingRule { .. })
    }

    /// Check if this is an internal pairing failure
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}

impl From<std::io::Error> for ReimburseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReimburseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ReimburseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for reimburse-cli operations
pub type ReimburseResult<T> = Result<T, ReimburseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReimburseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_conflicting_rule_error() {
        let err = ReimburseError::conflicting_rule("Utility Co");
        assert_eq!(
            err.to_string(),
            "Configuration error: 'Utility Co' is listed as both joint and personal"
        );
        assert!(err.is_configuration());
        assert!(!err.is_integrity());
    }

    #[test]
    fn test_not_found_error() {
        let err = ReimburseError::file_not_found("transactions.json");
        assert_eq!(err.to_string(), "File not found: transactions.json");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReimburseError = io_err.into();
        assert!(matches!(err, ReimburseError::Io(_)));
    }
}
