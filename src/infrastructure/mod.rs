//! # Infrastructure Layer
//!
//! Adapters to systems outside the process: the upstream movie catalogs.

pub mod providers;
