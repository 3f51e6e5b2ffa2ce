//! # Transport Errors
//!
//! Error types for outbound calls to movie providers.
//!
//! These errors describe what went wrong on the wire. They never leave the
//! infrastructure layer: provider clients fold them into
//! [`ErrorKind`](crate::domain::errors::ErrorKind) after logging.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::infrastructure::providers::error::TransportError;
//!
//! let error = TransportError::timeout("request timed out after 10s");
//! assert!(error.is_retryable());
//!
//! let error = TransportError::decode("missing field `movies`");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for provider transport operations.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Request could not be built or sent.
    #[error("provider request error: {message}")]
    Request {
        /// Error message.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("provider decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },

    /// Client misconfiguration (bad base URL, bad header value).
    #[error("provider configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },
}

impl TransportError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a request error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and the call may succeed on
    /// retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout(format!("request timed out: {}", error))
        } else if error.is_connect() {
            Self::connection(format!("connection failed: {}", error))
        } else if error.is_decode() {
            Self::decode(format!("failed to parse response: {}", error))
        } else {
            Self::request(format!("HTTP request failed: {}", error))
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
