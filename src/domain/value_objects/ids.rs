//! # Identifiers
//!
//! String-based identifiers for movies and providers.
//!
//! Upstream catalogs prefix every movie identifier with a two-character
//! provider tag (`cw0076759`, `fw0076759`). [`MovieId`] holds the normalized
//! form with that tag removed, so the same title from two providers compares
//! equal after merging.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::domain::value_objects::ids::MovieId;
//!
//! let id = MovieId::from_provider("cw0076759");
//! assert_eq!(id.as_str(), "0076759");
//! assert_eq!(id.with_prefix("fw"), "fw0076759");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the provider tag at the start of raw upstream identifiers.
pub const PROVIDER_PREFIX_LEN: usize = 2;

/// Normalized movie identifier shared across providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Wraps an already-normalized identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the identifier from a raw upstream value by removing the
    /// provider tag.
    ///
    /// Values shorter than the tag are kept unchanged.
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        Self(strip_provider_prefix(raw).to_string())
    }

    /// Returns the raw upstream form for a provider tag.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Removes the two-character provider tag from a raw identifier.
#[must_use]
pub fn strip_provider_prefix(raw: &str) -> &str {
    let mut chars = raw.chars();
    for _ in 0..PROVIDER_PREFIX_LEN {
        if chars.next().is_none() {
            return raw;
        }
    }
    chars.as_str()
}

/// Name of an upstream movie provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a provider identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
