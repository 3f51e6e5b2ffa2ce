//! # HTTP Client
//!
//! Shared outbound transport for provider clients.
//!
//! [`HttpClient`] wraps one `reqwest` client (and therefore one connection
//! pool) per provider with:
//! - a base URL that relative paths are resolved against
//! - the `x-access-token` header sent on every request
//! - a request timeout
//! - a [`RetryPolicy`] applied to every GET
//!
//! # Examples
//!
//! ```ignore
//! use movie_gateway::infrastructure::providers::http_client::HttpClient;
//! use movie_gateway::infrastructure::providers::retry::RetryPolicy;
//! use std::time::Duration;
//!
//! let client = HttpClient::with_access_token(
//!     "https://movies.example.com/api/cinemaworld/",
//!     "secret",
//!     Duration::from_secs(10),
//!     RetryPolicy::default(),
//! )?;
//! let response = client.get(&["movies"]).await?;
//! ```

use crate::infrastructure::providers::error::{TransportError, TransportResult};
use crate::infrastructure::providers::retry::RetryPolicy;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Header carrying the provider access token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// HTTP client bound to one provider's base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
    /// Request timeout.
    timeout: Duration,
    /// Retry policy for every request.
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client with custom default headers.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Provider base URL; a trailing `/` is added if missing.
    /// * `timeout` - Per-request timeout.
    /// * `default_headers` - Headers sent with every request.
    /// * `retry` - Retry policy applied to every request.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Configuration` if the base URL is invalid or
    /// the client cannot be created.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        default_headers: HeaderMap,
        retry: RetryPolicy,
    ) -> TransportResult<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                TransportError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
            retry,
        })
    }

    /// Creates a client that authenticates with the `x-access-token` header.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Provider base URL.
    /// * `token` - Access token, marked sensitive so it is not logged.
    /// * `timeout` - Per-request timeout.
    /// * `retry` - Retry policy applied to every request.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Configuration` if the token is not a valid
    /// header value, the base URL is invalid, or the client cannot be
    /// created.
    pub fn with_access_token(
        base_url: &str,
        token: &str,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> TransportResult<Self> {
        let mut value = HeaderValue::from_str(token).map_err(|e| {
            TransportError::configuration(format!("invalid access token header: {}", e))
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, value);
        Self::new(base_url, timeout, headers, retry)
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured request timeout.
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy.
    #[inline]
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Resolves path segments relative to the base URL.
    ///
    /// Each segment is percent-encoded as a whole, so `/`, `?`, `#` and `%`
    /// inside a segment never change the path structure or add a query.
    ///
    /// # Arguments
    ///
    /// * `segments` - Path segments appended below the base URL.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Configuration` if the base URL cannot carry
    /// a path.
    pub fn url<S: AsRef<str>>(&self, segments: &[S]) -> TransportResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TransportError::configuration(format!(
                    "base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Makes a GET request through the retry policy.
    ///
    /// Non-2xx responses are returned as-is so callers can classify the
    /// status; only transport failures become errors.
    ///
    /// # Arguments
    ///
    /// * `segments` - Path segments appended below the base URL.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Timeout` or `TransportError::Connection` when
    /// the last attempt failed on the wire.
    pub async fn get<S: AsRef<str>>(&self, segments: &[S]) -> TransportResult<Response> {
        let url = self.url(segments)?;
        self.retry
            .execute(|| {
                let request = self.client.get(url.clone());
                async move { request.send().await.map_err(TransportError::from) }
            })
            .await
    }

    /// Deserializes a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Decode` if the body is not the expected JSON.
    pub async fn decode<T: DeserializeOwned>(response: Response) -> TransportResult<T> {
        let body = response.bytes().await.map_err(TransportError::from)?;
        serde_json::from_slice(&body)
            .map_err(|e| TransportError::decode(format!("failed to parse response: {}", e)))
    }
}

fn parse_base_url(raw: &str) -> TransportResult<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized)
        .map_err(|e| TransportError::configuration(format!("invalid base URL {}: {}", raw, e)))
}
