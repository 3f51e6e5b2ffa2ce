//! # Domain Services
//!
//! Domain logic that doesn't naturally belong to a single entity.
//!
//! ## Services
//!
//! - [`catalog_merge`]: dedup and cheapest-wins rules for provider answers

pub mod catalog_merge;

pub use catalog_merge::{cheapest, merge_listings};
