//! # HTTP Movie Provider
//!
//! [`MovieProvider`] implementation for JSON-over-HTTP catalogs.
//!
//! The Cinema and Film catalogs share one wire contract and differ only in
//! base URL and the two-character tag that prefixes their identifiers. A
//! [`ProviderProfile`] captures that difference; [`HttpMovieProvider`] does
//! the rest.
//!
//! ## Paths
//!
//! - listing: `{base}/movies`
//! - detail: `{base}/movie/{prefix}{id}`, with `{prefix}{id}` percent-encoded
//!   as one segment

use crate::domain::entities::{Movie, MovieDetail};
use crate::domain::errors::{ErrorKind, ProviderResult};
use crate::domain::value_objects::{MovieId, ProviderId};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::payloads::{MovieDetailPayload, MovieListPayload};
use crate::infrastructure::providers::traits::MovieProvider;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Listing path relative to a provider's base URL.
pub const LISTING_PATH: &str = "movies";

/// Path segment under which detail records live.
pub const DETAIL_SEGMENT: &str = "movie";

/// What distinguishes one HTTP catalog from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    id: ProviderId,
    id_prefix: String,
}

impl ProviderProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(id: impl Into<String>, id_prefix: impl Into<String>) -> Self {
        Self {
            id: ProviderId::new(id),
            id_prefix: id_prefix.into(),
        }
    }

    /// The Cinema catalog (`cw` identifiers).
    #[must_use]
    pub fn cinema() -> Self {
        Self::new("cinema", "cw")
    }

    /// The Film catalog (`fw` identifiers).
    #[must_use]
    pub fn film() -> Self {
        Self::new("film", "fw")
    }

    /// Returns the provider identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    /// Returns the identifier prefix.
    #[inline]
    #[must_use]
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    /// Returns the detail path segments for a movie.
    ///
    /// The prefixed identifier is always a single segment; the client
    /// percent-encodes it, so it cannot escape the `movie/` path.
    #[must_use]
    pub fn detail_segments(&self, id: &MovieId) -> [String; 2] {
        [DETAIL_SEGMENT.to_string(), id.with_prefix(&self.id_prefix)]
    }
}

/// Movie provider backed by an HTTP catalog.
#[derive(Debug, Clone)]
pub struct HttpMovieProvider {
    profile: ProviderProfile,
    http: HttpClient,
}

impl HttpMovieProvider {
    /// Creates a provider from a profile and a configured client.
    #[must_use]
    pub fn new(profile: ProviderProfile, http: HttpClient) -> Self {
        Self { profile, http }
    }

    /// Returns the provider profile.
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &ProviderProfile {
        &self.profile
    }
}

#[async_trait]
impl MovieProvider for HttpMovieProvider {
    fn provider_id(&self) -> &ProviderId {
        self.profile.id()
    }

    async fn get_all(&self) -> ProviderResult<Vec<Movie>> {
        let provider = self.profile.id();

        let response = match self.http.get(&[LISTING_PATH]).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%provider, error = %e, "error fetching movie listing");
                return Err(ErrorKind::Unexpected);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                %provider,
                status = status.as_u16(),
                "error fetching movie listing"
            );
            return Err(ErrorKind::Unexpected);
        }

        match HttpClient::decode::<MovieListPayload>(response).await {
            Ok(payload) => Ok(payload.movies.into_iter().map(Movie::from).collect()),
            Err(e) => {
                tracing::error!(
                    %provider,
                    status = status.as_u16(),
                    error = %e,
                    "error decoding movie listing"
                );
                Err(ErrorKind::Unexpected)
            }
        }
    }

    async fn get_by_id(&self, id: &MovieId) -> ProviderResult<MovieDetail> {
        let provider = self.profile.id();
        let target = id.with_prefix(self.profile.id_prefix());

        if id.is_empty() {
            tracing::error!(%provider, "movie detail requested without an identifier");
            return Err(ErrorKind::Validation);
        }

        let response = match self.http.get(&self.profile.detail_segments(id)).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    %provider,
                    movie_id = %target,
                    error = %e,
                    "error fetching movie details"
                );
                return Err(ErrorKind::Unexpected);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let kind = match status {
                StatusCode::NOT_FOUND => ErrorKind::NotFound,
                _ => ErrorKind::Unexpected,
            };
            tracing::error!(
                %provider,
                movie_id = %target,
                status = status.as_u16(),
                kind = kind.as_str(),
                "error fetching movie details"
            );
            return Err(kind);
        }

        match HttpClient::decode::<MovieDetailPayload>(response).await {
            Ok(payload) => Ok(MovieDetail::from(payload)),
            Err(e) => {
                tracing::error!(
                    %provider,
                    movie_id = %target,
                    error = %e,
                    "error decoding movie details"
                );
                Err(ErrorKind::Unexpected)
            }
        }
    }
}
