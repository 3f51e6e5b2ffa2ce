//! # Movie Providers
//!
//! Clients for the upstream movie catalogs.
//!
//! ## Components
//!
//! - [`MovieProvider`]: port every catalog implements
//! - [`HttpMovieProvider`]: JSON-over-HTTP catalog client, configured by a
//!   [`ProviderProfile`] (Cinema or Film)
//! - [`HttpClient`]: outbound transport with access token and timeout
//! - [`RetryPolicy`]: exponential-backoff retry beneath the transport
//!
//! ## Failure Handling
//!
//! Transport problems are [`TransportError`]s inside this module. Provider
//! clients log them and report an
//! [`ErrorKind`](crate::domain::errors::ErrorKind) to their caller.

pub mod error;
pub mod http_client;
pub mod http_provider;
pub mod payloads;
pub mod retry;
pub mod traits;

pub use error::{TransportError, TransportResult};
pub use http_client::{ACCESS_TOKEN_HEADER, HttpClient};
pub use http_provider::{HttpMovieProvider, ProviderProfile};
pub use retry::RetryPolicy;
pub use traits::MovieProvider;
