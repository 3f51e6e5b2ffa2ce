//! # Domain Entities
//!
//! - [`Movie`]: listing summary shared by all providers
//! - [`MovieDetail`]: full record with the provider price

pub mod movie;

pub use movie::{Movie, MovieDetail};
