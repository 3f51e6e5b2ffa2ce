//! # Movie Provider Trait
//!
//! Port definition for upstream movie catalogs.
//!
//! Every catalog the gateway aggregates implements [`MovieProvider`]. The
//! aggregation service only ever talks to `Arc<dyn MovieProvider>`, so a new
//! catalog is added by implementing the trait and registering one more
//! provider; the merge logic does not change.
//!
//! # Examples
//!
//! ```ignore
//! use movie_gateway::infrastructure::providers::traits::MovieProvider;
//!
//! struct MyCatalog { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl MovieProvider for MyCatalog {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{Movie, MovieDetail};
use crate::domain::errors::ProviderResult;
use crate::domain::value_objects::{MovieId, ProviderId};
use async_trait::async_trait;
use std::fmt;

/// Capability shared by every upstream movie catalog.
///
/// Implementations never fail hard for expected conditions: a missing movie
/// or an unreachable upstream is reported through the returned
/// [`ProviderResult`].
#[async_trait]
pub trait MovieProvider: Send + Sync + fmt::Debug {
    /// Returns the provider's identifier.
    fn provider_id(&self) -> &ProviderId;

    /// Fetches the provider's full listing.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::Unexpected` when the listing cannot be fetched or
    /// decoded.
    async fn get_all(&self) -> ProviderResult<Vec<Movie>>;

    /// Fetches the detail record for one movie.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::NotFound` when the provider does not know the
    /// movie, `ErrorKind::Validation` for an empty identifier and
    /// `ErrorKind::Unexpected` for any other failure.
    async fn get_by_id(&self, id: &MovieId) -> ProviderResult<MovieDetail>;
}
