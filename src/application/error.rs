//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors describe why an aggregated request could not be answered.
//! They are produced by the aggregation service from the combination of
//! provider outcomes and translated to HTTP exactly once, in the REST layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(String)            - Caller input malformed
//! ├── NotFound { resource_type, id } - Every provider reported the movie missing
//! ├── AllProvidersUnavailable       - No provider produced a usable answer
//! └── Internal(String)              - Anything else
//! ```
//!
//! # Examples
//!
//! ```
//! use movie_gateway::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("movie id must not be empty");
//! assert!(err.is_validation());
//!
//! let err = ApplicationError::not_found("movie", "0076759");
//! assert!(err.is_not_found());
//! ```

use std::fmt;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// No provider produced a usable answer.
    #[error("all providers are unavailable{}", ProviderFailures(.failures))]
    AllProvidersUnavailable {
        /// One `provider: reason` entry per failed provider.
        failures: Vec<String>,
    },

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

struct ProviderFailures<'a>(&'a [String]);

impl fmt::Display for ProviderFailures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, ": {}", self.0.join(", "))
        }
    }
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Creates an all-providers-unavailable error.
    #[must_use]
    pub fn all_providers_unavailable(failures: Vec<String>) -> Self {
        Self::AllProvidersUnavailable { failures }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if no provider could answer.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::AllProvidersUnavailable { .. })
    }

    /// Returns the failure category name exposed to API clients.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::NotFound { .. } => "NotFoundError",
            Self::AllProvidersUnavailable { .. } => "ProvidersUnavailableError",
            Self::Internal(_) => "InternalError",
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
