//! Error types for table ingestion.
//!
//! Only conditions that make the input unusable as a table at all are errors.
//! Data-quality problems are reported as [`Finding`](crate::Finding)s inside a
//! [`ValidationReport`](crate::ValidationReport) instead.

use thiserror::Error;

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Fatal errors raised while turning text into a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestError {
    /// Nothing but blank lines (or nothing at all) was supplied
    #[error("Input contains no non-blank lines")]
    EmptyInput,

    /// The delimited-text reader could not produce records
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// A configuration value is out of range
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending setting
        field: String,
        /// Why the value was rejected
        message: String,
    },
}

impl IngestError {
    /// Creates a new invalid configuration error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if the input was unreadable rather than misconfigured.
    pub fn is_unreadable_input(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IngestError::EmptyInput.to_string(),
            "Input contains no non-blank lines"
        );
        assert_eq!(
            IngestError::invalid_config("delimiter", "must be ASCII").to_string(),
            "Invalid configuration for 'delimiter': must be ASCII"
        );
    }

    #[test]
    fn test_unreadable_classification() {
        assert!(IngestError::EmptyInput.is_unreadable_input());
        assert!(IngestError::Malformed("bad".into()).is_unreadable_input());
        assert!(!IngestError::invalid_config("x", "y").is_unreadable_input());
    }
}
