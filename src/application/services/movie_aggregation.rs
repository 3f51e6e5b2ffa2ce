//! # Movie Aggregation Service
//!
//! Orchestrates concurrent lookups across movie providers.
//!
//! This module provides the [`MovieAggregationService`] which dispatches the
//! same request to every registered provider at once, waits for all of them,
//! and reconciles their outcomes:
//!
//! - listings are merged, keeping the first entry seen per identifier in
//!   provider order
//! - detail lookups return the cheapest successful record
//! - failures are promoted to one [`ApplicationError`] when no provider could
//!   answer
//!
//! There is no first-success short-circuit: every provider call finishes (or
//! fails) before reconciliation runs.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::catalog::MovieCatalog;
use crate::domain::entities::{Movie, MovieDetail};
use crate::domain::errors::{ErrorKind, ProviderResult};
use crate::domain::services::{cheapest, merge_listings};
use crate::domain::value_objects::MovieId;
use crate::infrastructure::providers::MovieProvider;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

/// Aggregates movie data from several providers.
///
/// Provider order matters: it is the tie-break for duplicate listing
/// entries and equal detail prices.
#[derive(Debug, Clone)]
pub struct MovieAggregationService {
    providers: Vec<Arc<dyn MovieProvider>>,
}

impl MovieAggregationService {
    /// Creates a service over the given providers, in priority order.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn MovieProvider>>) -> Self {
        Self { providers }
    }

    /// Returns the registered providers.
    #[must_use]
    pub fn providers(&self) -> &[Arc<dyn MovieProvider>] {
        &self.providers
    }

    /// Returns the merged listing of every provider.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::AllProvidersUnavailable` if every provider
    /// failed, or if no provider is registered.
    pub async fn get_all(&self) -> ApplicationResult<Vec<Movie>> {
        let results = join_all(self.providers.iter().map(|p| p.get_all())).await;

        if results.iter().all(Result::is_err) {
            return Err(self.unavailable(&results));
        }

        let responded = results.iter().filter(|r| r.is_ok()).count();
        let merged = merge_listings(results.into_iter().filter_map(Result::ok));
        tracing::debug!(
            providers = self.providers.len(),
            responded,
            movies = merged.len(),
            "merged movie listings"
        );
        Ok(merged)
    }

    /// Returns the cheapest detail record for a movie.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `ApplicationError::Validation` if `id` is blank; no provider is called
    /// - `ApplicationError::NotFound` if every provider reported the movie
    ///   missing
    /// - `ApplicationError::AllProvidersUnavailable` if every provider failed
    ///   for any other mix of reasons
    pub async fn get_by_id(&self, id: &str) -> ApplicationResult<MovieDetail> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApplicationError::validation("movie id must not be empty"));
        }
        if self.providers.is_empty() {
            return Err(ApplicationError::all_providers_unavailable(Vec::new()));
        }

        let movie_id = MovieId::new(id);
        let results = join_all(self.providers.iter().map(|p| p.get_by_id(&movie_id))).await;

        if results
            .iter()
            .all(|r| matches!(r, Err(kind) if kind.is_not_found()))
        {
            return Err(ApplicationError::not_found("movie", id));
        }

        if results.iter().all(Result::is_err) {
            return Err(self.unavailable(&results));
        }

        let responded = results.iter().filter(|r| r.is_ok()).count();
        let best = cheapest(results.into_iter().filter_map(Result::ok))
            .ok_or_else(|| ApplicationError::internal("no successful provider result"))?;
        tracing::debug!(
            movie_id = %movie_id,
            providers = self.providers.len(),
            responded,
            price = %best.price(),
            "selected cheapest movie detail"
        );
        Ok(best)
    }

    fn unavailable<T>(&self, results: &[ProviderResult<T>]) -> ApplicationError {
        let failures = self
            .providers
            .iter()
            .zip(results)
            .filter_map(|(provider, result)| {
                result.as_ref().err().map(|kind: &ErrorKind| {
                    format!("{}: {}", provider.provider_id(), kind.as_str())
                })
            })
            .collect();
        ApplicationError::all_providers_unavailable(failures)
    }
}

#[async_trait]
impl MovieCatalog for MovieAggregationService {
    async fn list_movies(&self) -> ApplicationResult<Vec<Movie>> {
        self.get_all().await
    }

    async fn movie_by_id(&self, id: &str) -> ApplicationResult<MovieDetail> {
        self.get_by_id(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProviderId;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug)]
    struct MockProvider {
        id: ProviderId,
        listing: ProviderResult<Vec<Movie>>,
        detail: ProviderResult<MovieDetail>,
        delay_ms: u64,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(id: &str) -> Self {
            Self {
                id: ProviderId::new(id),
                listing: Err(ErrorKind::Unexpected),
                detail: Err(ErrorKind::Unexpected),
                delay_ms: 0,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_listing(mut self, listing: ProviderResult<Vec<Movie>>) -> Self {
            self.listing = listing;
            self
        }

        fn with_detail(mut self, detail: ProviderResult<MovieDetail>) -> Self {
            self.detail = detail;
            self
        }

        fn with_delay(mut self, delay_ms: u64) -> Self {
            self.delay_ms = delay_ms;
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MovieProvider for MockProvider {
        fn provider_id(&self) -> &ProviderId {
            &self.id
        }

        async fn get_all(&self) -> ProviderResult<Vec<Movie>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            self.listing.clone()
        }

        async fn get_by_id(&self, _id: &MovieId) -> ProviderResult<MovieDetail> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            self.detail.clone()
        }
    }

    fn movie(id: &str, title: &str) -> Movie {
        Movie::new(MovieId::new(id), title, "movie", "", "2023")
    }

    fn detail(id: &str, title: &str, price: Decimal) -> MovieDetail {
        MovieDetail::new(movie(id, title), price)
    }

    fn service(
        cinema: MockProvider,
        film: MockProvider,
    ) -> (MovieAggregationService, Arc<MockProvider>, Arc<MockProvider>) {
        let cinema = Arc::new(cinema);
        let film = Arc::new(film);
        let providers: Vec<Arc<dyn MovieProvider>> = vec![cinema.clone(), film.clone()];
        (MovieAggregationService::new(providers), cinema, film)
    }

    #[tokio::test]
    async fn get_all_both_succeed_returns_distinct_movies() {
        let (svc, _, _) = service(
            MockProvider::new("cinema")
                .with_listing(Ok(vec![movie("1", "Movie 1"), movie("2", "Movie 2")])),
            MockProvider::new("film")
                .with_listing(Ok(vec![movie("1", "Movie 1"), movie("3", "Movie 3")])),
        );

        let movies = svc.get_all().await.unwrap();

        let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn get_all_duplicate_keeps_cinema_entry() {
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_listing(Ok(vec![movie("1", "cinema title")])),
            MockProvider::new("film").with_listing(Ok(vec![movie("1", "film title")])),
        );

        let movies = svc.get_all().await.unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "cinema title");
    }

    #[tokio::test]
    async fn get_all_one_provider_succeeds_returns_its_list() {
        let cinema_movies = vec![movie("1", "Movie 1"), movie("2", "Movie 2")];
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_listing(Ok(cinema_movies.clone())),
            MockProvider::new("film").with_listing(Err(ErrorKind::Unexpected)),
        );

        assert_eq!(svc.get_all().await.unwrap(), cinema_movies);
    }

    #[tokio::test]
    async fn get_all_empty_success_is_not_a_failure() {
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_listing(Ok(Vec::new())),
            MockProvider::new("film").with_listing(Err(ErrorKind::Unexpected)),
        );

        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_all_fail_is_unavailable() {
        let (svc, _, _) = service(MockProvider::new("cinema"), MockProvider::new("film"));

        let err = svc.get_all().await.unwrap_err();

        assert!(err.is_unavailable());
        assert!(err.to_string().contains("cinema: UNEXPECTED"));
        assert!(err.to_string().contains("film: UNEXPECTED"));
    }

    #[tokio::test]
    async fn get_all_without_providers_is_unavailable() {
        let svc = MovieAggregationService::new(Vec::new());
        assert!(svc.get_all().await.unwrap_err().is_unavailable());
    }

    #[tokio::test(start_paused = true)]
    async fn get_all_dispatches_concurrently() {
        let (svc, _, _) = service(
            MockProvider::new("cinema")
                .with_listing(Ok(vec![movie("1", "a")]))
                .with_delay(1000),
            MockProvider::new("film")
                .with_listing(Ok(vec![movie("2", "b")]))
                .with_delay(1000),
        );
        let started = tokio::time::Instant::now();

        let movies = svc.get_all().await.unwrap();

        assert_eq!(movies.len(), 2);
        assert!(started.elapsed() < Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn get_by_id_dispatches_concurrently() {
        let (svc, cinema, film) = service(
            MockProvider::new("cinema")
                .with_detail(Ok(detail("1", "cinema", Decimal::TWO)))
                .with_delay(1000),
            MockProvider::new("film")
                .with_detail(Ok(detail("1", "film", Decimal::ONE)))
                .with_delay(1000),
        );
        let started = tokio::time::Instant::now();

        let result = svc.get_by_id("1").await.unwrap();

        assert_eq!(result.movie.title, "film");
        assert!(started.elapsed() < Duration::from_millis(1500));
        assert_eq!(cinema.calls(), 1);
        assert_eq!(film.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn get_by_id_waits_for_slow_success_after_fast_failure() {
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_detail(Err(ErrorKind::NotFound)),
            MockProvider::new("film")
                .with_detail(Ok(detail("1", "film", Decimal::ONE)))
                .with_delay(1000),
        );
        let started = tokio::time::Instant::now();

        let result = svc.get_by_id("1").await.unwrap();

        assert_eq!(result.movie.title, "film");
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn get_by_id_both_succeed_returns_cheapest() {
        let (svc, _, _) = service(
            MockProvider::new("cinema")
                .with_detail(Ok(detail("123", "Movie 1", Decimal::new(1550, 2)))),
            MockProvider::new("film")
                .with_detail(Ok(detail("123", "Movie 1", Decimal::new(1299, 2)))),
        );

        let result = svc.get_by_id("123").await.unwrap();

        assert_eq!(result.price(), Decimal::new(1299, 2));
    }

    #[tokio::test]
    async fn get_by_id_one_succeeds_returns_it_regardless_of_price() {
        let (svc, _, _) = service(
            MockProvider::new("cinema")
                .with_detail(Ok(detail("123", "Movie 1", Decimal::new(99999, 2)))),
            MockProvider::new("film").with_detail(Err(ErrorKind::NotFound)),
        );

        let result = svc.get_by_id("123").await.unwrap();

        assert_eq!(result.price(), Decimal::new(99999, 2));
    }

    #[tokio::test]
    async fn get_by_id_second_succeeds_when_first_unexpected() {
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_detail(Err(ErrorKind::Unexpected)),
            MockProvider::new("film")
                .with_detail(Ok(detail("123", "film", Decimal::new(2000, 2)))),
        );

        assert_eq!(svc.get_by_id("123").await.unwrap().movie.title, "film");
    }

    #[tokio::test]
    async fn get_by_id_all_not_found_is_not_found() {
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_detail(Err(ErrorKind::NotFound)),
            MockProvider::new("film").with_detail(Err(ErrorKind::NotFound)),
        );

        let err = svc.get_by_id("123").await.unwrap_err();

        assert_eq!(err, ApplicationError::not_found("movie", "123"));
    }

    #[tokio::test]
    async fn get_by_id_mixed_failures_are_unavailable() {
        let (svc, _, _) = service(
            MockProvider::new("cinema").with_detail(Err(ErrorKind::NotFound)),
            MockProvider::new("film").with_detail(Err(ErrorKind::Unexpected)),
        );

        let err = svc.get_by_id("123").await.unwrap_err();

        assert!(err.is_unavailable());
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn get_by_id_all_unexpected_is_unavailable() {
        let (svc, _, _) = service(MockProvider::new("cinema"), MockProvider::new("film"));
        assert!(svc.get_by_id("123").await.unwrap_err().is_unavailable());
    }

    #[tokio::test]
    async fn get_by_id_blank_id_fails_before_any_call() {
        let (svc, cinema, film) = service(
            MockProvider::new("cinema")
                .with_detail(Ok(detail("1", "x", Decimal::ONE))),
            MockProvider::new("film"),
        );

        for blank in ["", "   "] {
            let err = svc.get_by_id(blank).await.unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(cinema.calls(), 0);
        assert_eq!(film.calls(), 0);
    }

    #[tokio::test]
    async fn get_by_id_queries_every_provider_once() {
        let (svc, cinema, film) = service(
            MockProvider::new("cinema")
                .with_detail(Ok(detail("1", "x", Decimal::ONE))),
            MockProvider::new("film")
                .with_detail(Ok(detail("1", "y", Decimal::TWO))),
        );

        svc.get_by_id("1").await.unwrap();

        assert_eq!(cinema.calls(), 1);
        assert_eq!(film.calls(), 1);
    }
}
