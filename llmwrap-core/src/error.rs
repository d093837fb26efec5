//! Error types for llmwrap
//!
//! The wrapper itself never produces or translates errors: whatever the wrapped
//! client returns is handed back to the caller. This type is the error used by
//! the bundled provider clients and by the parameter conversions in this crate.

use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// The main error type for llmwrap operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level failure before a response was received
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// The provider answered with a non-success status
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name (e.g., "openai", "anthropic")
        provider: String,
        /// HTTP status code, when the failure came from a response
        status: Option<u16>,
        /// Error message
        message: String,
        /// Time to wait before retrying (for rate limits)
        retry_after: Option<Duration>,
    },

    /// Credentials were missing or rejected
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Provider { status, .. } => *status,
            _ => None,
        }
    }

    /// Suggested wait before retrying, if the provider sent one
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Provider { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for llmwrap operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
