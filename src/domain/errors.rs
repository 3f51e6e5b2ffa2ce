//! # Domain Errors
//!
//! Outcome classification for a single provider call.
//!
//! Every provider operation returns a [`ProviderResult`]: either the mapped
//! value or an [`ErrorKind`] describing why the provider could not answer.
//! Expected conditions such as a missing movie or an unreachable upstream are
//! values of this type, never panics.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::domain::errors::{ErrorKind, ProviderResult};
//!
//! let outcome: ProviderResult<u32> = Err(ErrorKind::NotFound);
//! assert!(outcome.is_err_and(|kind| kind.is_not_found()));
//! ```

use thiserror::Error;

/// Why a provider call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// The provider has no resource with the requested identifier.
    #[error("resource not found")]
    NotFound,

    /// The caller's input was malformed.
    #[error("invalid input")]
    Validation,

    /// Transport, decoding or unclassified upstream failure.
    #[error("unexpected provider failure")]
    Unexpected,
}

impl ErrorKind {
    /// Returns true for [`ErrorKind::NotFound`].
    #[inline]
    #[must_use]
    pub fn is_not_found(self) -> bool {
        self == Self::NotFound
    }

    /// Returns the category name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
            Self::Unexpected => "UNEXPECTED",
        }
    }
}

/// Outcome of one provider call.
pub type ProviderResult<T> = Result<T, ErrorKind>;
