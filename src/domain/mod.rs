//! # Domain Layer
//!
//! Movie entities, identifiers, provider outcome classification and the
//! merge rules used by aggregation. Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
