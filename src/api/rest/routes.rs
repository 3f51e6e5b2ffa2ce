//! # REST Routes
//!
//! Router construction for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the REST router.
///
/// When `cors_origin` is set, browser requests from that origin are allowed
/// to issue `GET` requests.
#[must_use]
pub fn create_router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let router = Router::new()
        .route("/api/movies", get(handlers::list_movies))
        .route("/api/movies/{id}", get(handlers::get_movie))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match cors_origin {
        Some(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET]),
        ),
        None => router,
    }
}
