//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /api/movies` - Merged listing across providers
//! - `GET /api/movies/{id}` - Cheapest detail record for one movie
//! - `GET /api/health` - Health check endpoint
//!
//! Failures are rendered by [`ApiError`] as problem documents.
//!
//! # Usage
//!
//! ```ignore
//! use movie_gateway::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = AppState::new(Arc::new(catalog));
//! let router = create_router(state, None);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8001").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, ProblemDetails};
pub use handlers::{AppState, HealthResponse, MovieDetailResponse, MovieSummaryResponse};
pub use routes::create_router;
