//! # Application Layer
//!
//! Use cases built on top of the domain and provider ports.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
