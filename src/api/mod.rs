//! # API Layer
//!
//! Inbound HTTP surface of the gateway.

pub mod rest;
