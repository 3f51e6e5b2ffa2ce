//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! - [`MovieId`]: provider-independent movie identifier
//! - [`ProviderId`]: name of an upstream catalog

pub mod ids;

pub use ids::{MovieId, PROVIDER_PREFIX_LEN, ProviderId, strip_provider_prefix};
