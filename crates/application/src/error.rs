//! Application-level errors

use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The configuration violates a workspace invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configuration document could not be read or parsed
    #[error("Failed to load '{location}': {reason}")]
    Source { location: String, reason: String },

    /// The document format is not supported
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document exceeds the configured size limit
    #[error("Document '{location}' is {size} bytes, limit is {limit}")]
    DocumentTooLarge {
        location: String,
        size: u64,
        limit: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Create a source error for a document location
    pub fn load_failed(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Source {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error is a configuration invariant violation
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
