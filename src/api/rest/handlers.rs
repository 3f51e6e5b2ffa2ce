//! # REST Handlers
//!
//! Request handlers and wire DTOs for the movie endpoints.

use crate::api::rest::error::ApiResult;
use crate::application::services::MovieCatalog;
use crate::domain::entities::{Movie, MovieDetail};
use axum::Json;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog answering movie queries.
    pub catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    /// Creates handler state over a catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }
}

/// Listing entry as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummaryResponse {
    /// Movie identifier without provider prefix.
    pub id: String,
    /// Title.
    pub title: String,
    /// Entry type.
    #[serde(rename = "type")]
    pub movie_type: String,
    /// Poster URL.
    pub poster: String,
    /// Release year.
    pub year: String,
}

impl From<Movie> for MovieSummaryResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id.as_str().to_string(),
            title: movie.title,
            movie_type: movie.movie_type,
            poster: movie.poster,
            year: movie.year,
        }
    }
}

/// Detail record as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailResponse {
    /// Movie identifier without provider prefix.
    pub id: String,
    /// Title.
    pub title: String,
    /// Entry type.
    #[serde(rename = "type")]
    pub movie_type: String,
    /// Poster URL.
    pub poster: String,
    /// Release year.
    pub year: String,
    /// Plot summary.
    pub plot: Option<String>,
    /// Director.
    pub director: Option<String>,
    /// Cast.
    pub actors: Option<String>,
    /// Runtime.
    pub runtime: Option<String>,
    /// Audience rating.
    pub imdb_rating: Option<String>,
    /// Release date.
    pub released: Option<String>,
    /// Language.
    pub language: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Awards.
    pub awards: Option<String>,
    /// Cheapest price across providers.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Content rating.
    pub rated: Option<String>,
    /// Genre.
    pub genre: Option<String>,
    /// Writer.
    pub writer: Option<String>,
    /// Metascore.
    pub metascore: Option<String>,
    /// Vote count.
    pub votes: Option<String>,
}

impl From<MovieDetail> for MovieDetailResponse {
    fn from(detail: MovieDetail) -> Self {
        let movie = detail.movie;
        Self {
            id: movie.id.as_str().to_string(),
            title: movie.title,
            movie_type: movie.movie_type,
            poster: movie.poster,
            year: movie.year,
            plot: detail.plot,
            director: detail.director,
            actors: detail.actors,
            runtime: detail.runtime,
            imdb_rating: detail.rating,
            released: detail.released,
            language: detail.language,
            country: detail.country,
            awards: detail.awards,
            price: detail.price,
            rated: detail.rated,
            genre: detail.genre,
            writer: detail.writer,
            metascore: detail.metascore,
            votes: detail.votes,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// `GET /api/movies`
///
/// # Errors
///
/// Returns an `ApiError` when no provider could produce a listing.
pub async fn list_movies(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MovieSummaryResponse>>> {
    let movies = state.catalog.list_movies().await?;
    Ok(Json(
        movies.into_iter().map(MovieSummaryResponse::from).collect(),
    ))
}

/// `GET /api/movies/{id}`
///
/// # Errors
///
/// Returns an `ApiError` for a blank id, an unknown movie, or unavailable
/// providers.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MovieDetailResponse>> {
    let detail = state.catalog.movie_by_id(&id).await?;
    Ok(Json(MovieDetailResponse::from(detail)))
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MovieId;
    use serde_json::json;

    #[test]
    fn summary_uses_wire_names() {
        let movie = Movie::new(MovieId::new("0076759"), "A New Hope", "movie", "p.jpg", "1977");

        let value = serde_json::to_value(MovieSummaryResponse::from(movie)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "0076759",
                "title": "A New Hope",
                "type": "movie",
                "poster": "p.jpg",
                "year": "1977"
            })
        );
    }

    #[test]
    fn detail_renames_rating_and_emits_numeric_price() {
        let mut detail = MovieDetail::new(
            Movie::new(MovieId::new("0076759"), "A New Hope", "movie", "", "1977"),
            Decimal::new(1299, 2),
        );
        detail.rating = Some("8.7".to_string());
        detail.director = Some("George Lucas".to_string());

        let value = serde_json::to_value(MovieDetailResponse::from(detail)).unwrap();

        assert_eq!(value["id"], "0076759");
        assert_eq!(value["imdbRating"], "8.7");
        assert_eq!(value["director"], "George Lucas");
        assert_eq!(value["price"], json!(12.99));
        assert!(value.get("rating").is_none());
    }

    #[tokio::test]
    async fn health_reports_version() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
