//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`MovieAggregationService`]: Concurrent provider fan-out and merging
//! - [`CachedMovieCatalog`]: Listing cache in front of aggregation
//! - [`MovieCatalog`]: Read-side port consumed by the REST layer

pub mod catalog;
pub mod listing_cache;
pub mod movie_aggregation;

pub use catalog::MovieCatalog;
pub use listing_cache::{CachedMovieCatalog, DEFAULT_LISTING_TTL, ListingCache};
pub use movie_aggregation::MovieAggregationService;
