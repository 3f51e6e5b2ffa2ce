//! # Movie Catalog
//!
//! Read-side port consumed by the REST layer.
//!
//! Handlers depend on `Arc<dyn MovieCatalog>` rather than on the aggregation
//! service directly, so caching can be layered in front of aggregation and
//! tests can substitute a scripted catalog.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{Movie, MovieDetail};
use async_trait::async_trait;
use std::fmt;

/// Source of the aggregated movie listing and details.
#[async_trait]
pub trait MovieCatalog: Send + Sync + fmt::Debug {
    /// Returns the merged listing.
    ///
    /// # Errors
    ///
    /// Returns an `ApplicationError` when no listing could be produced.
    async fn list_movies(&self) -> ApplicationResult<Vec<Movie>>;

    /// Returns the detail record for one movie.
    ///
    /// # Errors
    ///
    /// Returns an `ApplicationError` for a blank id, a missing movie, or
    /// unavailable providers.
    async fn movie_by_id(&self, id: &str) -> ApplicationResult<MovieDetail>;
}
