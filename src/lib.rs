//! # Movie Gateway
//!
//! Aggregation gateway that merges movie catalogs from several upstream
//! providers behind one REST API.
//!
//! Each request fans out to every provider concurrently. Listings are merged
//! by identifier, detail lookups return the cheapest offer, and failures are
//! reported as problem documents.
//!
//! # Architecture
//!
//! - [`domain`]: movie entities, provider error kinds and the merge rules
//! - [`application`]: aggregation service, listing cache and the catalog port
//! - [`infrastructure`]: HTTP provider clients with retry
//! - [`api`]: axum router, handlers and error translation
//! - [`config`]: layered startup configuration
//!
//! # Examples
//!
//! ```ignore
//! use movie_gateway::{build_app, config::AppConfig};
//!
//! let config = AppConfig::load(None)?;
//! let router = build_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::api::rest::{AppState, create_router};
use crate::application::services::{
    CachedMovieCatalog, ListingCache, MovieAggregationService, MovieCatalog,
};
use crate::config::{AppConfig, ConfigError, ConfigResult};
use crate::infrastructure::providers::{
    HttpClient, HttpMovieProvider, MovieProvider, ProviderProfile,
};
use axum::Router;
use std::sync::Arc;

/// Builds the configured providers in priority order: Cinema, then Film.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if an HTTP client cannot be created.
pub fn build_providers(config: &AppConfig) -> ConfigResult<Vec<Arc<dyn MovieProvider>>> {
    let settings = &config.providers;
    [
        (ProviderProfile::cinema(), "providers.cinema_url", &settings.cinema_url),
        (ProviderProfile::film(), "providers.film_url", &settings.film_url),
    ]
    .into_iter()
    .map(|(profile, field, url)| -> ConfigResult<Arc<dyn MovieProvider>> {
        let http = HttpClient::with_access_token(
            url,
            &settings.token,
            config.provider_timeout(),
            config.retry_policy(),
        )
        .map_err(|e| ConfigError::invalid(field, e.to_string()))?;
        tracing::info!(
            provider = %profile.id(),
            base_url = %http.base_url(),
            "provider configured"
        );
        Ok(Arc::new(HttpMovieProvider::new(profile, http)))
    })
    .collect()
}

/// Builds the catalog served by the REST layer: aggregation behind the
/// listing cache.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if a provider cannot be built.
pub fn build_catalog(config: &AppConfig) -> ConfigResult<Arc<dyn MovieCatalog>> {
    let aggregator: Arc<dyn MovieCatalog> =
        Arc::new(MovieAggregationService::new(build_providers(config)?));
    let cache = ListingCache::new(config.cache_ttl());
    Ok(Arc::new(CachedMovieCatalog::new(aggregator, cache)))
}

/// Builds the complete application router.
///
/// # Errors
///
/// Returns `ConfigError` if providers or CORS cannot be configured.
pub fn build_app(config: &AppConfig) -> ConfigResult<Router> {
    let state = AppState::new(build_catalog(config)?);
    Ok(create_router(state, config.cors_origin()?))
}
