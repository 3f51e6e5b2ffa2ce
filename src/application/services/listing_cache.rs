//! # Listing Cache
//!
//! Short-lived cache for the merged movie listing.
//!
//! The merged listing changes rarely and costs one call per provider, so the
//! gateway keeps the last successful result for a configurable time-to-live.
//! Failures are never cached: the next request retries the providers.
//!
//! Concurrent misses are coalesced by [`CachedMovieCatalog`]: one request
//! refreshes the listing while the others wait for it and then read the
//! fresh entry. When the refresh fails, each waiter makes its own attempt.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::application::services::listing_cache::ListingCache;
//! use std::time::Duration;
//!
//! let cache = ListingCache::new(Duration::from_secs(300));
//! assert!(cache.get().is_none());
//!
//! cache.put(Vec::new());
//! assert_eq!(cache.get(), Some(Vec::new()));
//! ```

use crate::application::error::ApplicationResult;
use crate::application::services::catalog::MovieCatalog;
use crate::domain::entities::{Movie, MovieDetail};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Default time-to-live of a cached listing.
pub const DEFAULT_LISTING_TTL: Duration = Duration::from_secs(300);

#[derive(Debug)]
struct CachedListing {
    movies: Vec<Movie>,
    stored_at: Instant,
}

/// Single-entry TTL cache for the merged listing.
#[derive(Debug)]
pub struct ListingCache {
    ttl: Duration,
    entry: RwLock<Option<CachedListing>>,
}

impl ListingCache {
    /// Creates a cache. A zero `ttl` disables caching.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Returns the configured time-to-live.
    #[inline]
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns true if the cache stores anything at all.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Returns the cached listing if it is still fresh.
    ///
    /// A stale entry is evicted.
    #[must_use]
    pub fn get(&self) -> Option<Vec<Movie>> {
        {
            let entry = self.entry.read();
            match entry.as_ref() {
                None => return None,
                Some(cached) if cached.stored_at.elapsed() < self.ttl => {
                    return Some(cached.movies.clone());
                }
                Some(_) => {}
            }
        }

        let mut entry = self.entry.write();
        if entry
            .as_ref()
            .is_some_and(|cached| cached.stored_at.elapsed() >= self.ttl)
        {
            *entry = None;
        }
        None
    }

    /// Stores a listing, replacing any previous one.
    pub fn put(&self, movies: Vec<Movie>) {
        if !self.is_enabled() {
            return;
        }
        *self.entry.write() = Some(CachedListing {
            movies,
            stored_at: Instant::now(),
        });
    }

    /// Drops the cached listing.
    pub fn invalidate(&self) {
        *self.entry.write() = None;
    }
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_TTL)
    }
}

/// Catalog that serves listings from a [`ListingCache`] when it can.
///
/// Detail lookups always go to the inner catalog.
#[derive(Debug)]
pub struct CachedMovieCatalog {
    inner: Arc<dyn MovieCatalog>,
    cache: ListingCache,
    refresh: Mutex<()>,
}

impl CachedMovieCatalog {
    /// Wraps a catalog with a listing cache.
    #[must_use]
    pub fn new(inner: Arc<dyn MovieCatalog>, cache: ListingCache) -> Self {
        Self {
            inner,
            cache,
            refresh: Mutex::new(()),
        }
    }

    /// Returns the listing cache.
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &ListingCache {
        &self.cache
    }
}

#[async_trait]
impl MovieCatalog for CachedMovieCatalog {
    async fn list_movies(&self) -> ApplicationResult<Vec<Movie>> {
        if let Some(movies) = self.cache.get() {
            tracing::debug!(movies = movies.len(), "serving movie listing from cache");
            return Ok(movies);
        }
        if !self.cache.is_enabled() {
            return self.inner.list_movies().await;
        }

        let _refresh = self.refresh.lock().await;
        if let Some(movies) = self.cache.get() {
            tracing::debug!(
                movies = movies.len(),
                "serving movie listing refreshed by another request"
            );
            return Ok(movies);
        }

        let movies = self.inner.list_movies().await?;
        self.cache.put(movies.clone());
        Ok(movies)
    }

    async fn movie_by_id(&self, id: &str) -> ApplicationResult<MovieDetail> {
        self.inner.movie_by_id(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::domain::value_objects::MovieId;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn movie(id: &str) -> Movie {
        Movie::new(MovieId::new(id), format!("Movie {id}"), "movie", "", "2020")
    }

    #[derive(Debug, Default)]
    struct ScriptedCatalog {
        listings: parking_lot::Mutex<VecDeque<ApplicationResult<Vec<Movie>>>>,
        delay: Duration,
        list_calls: AtomicUsize,
        detail_calls: AtomicUsize,
    }

    impl ScriptedCatalog {
        fn with_listings(listings: Vec<ApplicationResult<Vec<Movie>>>) -> Arc<Self> {
            Arc::new(Self {
                listings: parking_lot::Mutex::new(listings.into()),
                ..Self::default()
            })
        }

        fn with_delayed_listings(
            listings: Vec<ApplicationResult<Vec<Movie>>>,
            delay: Duration,
        ) -> Arc<Self> {
            Arc::new(Self {
                listings: parking_lot::Mutex::new(listings.into()),
                delay,
                ..Self::default()
            })
        }
    }

    #[async_trait]
    impl MovieCatalog for ScriptedCatalog {
        async fn list_movies(&self) -> ApplicationResult<Vec<Movie>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.listings
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ApplicationError::internal("script exhausted")))
        }

        async fn movie_by_id(&self, id: &str) -> ApplicationResult<MovieDetail> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            Err(ApplicationError::not_found("movie", id))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cache_returns_fresh_entry() {
        let cache = ListingCache::new(Duration::from_secs(60));
        cache.put(vec![movie("1")]);

        tokio::time::advance(Duration::from_secs(59)).await;

        assert_eq!(cache.get(), Some(vec![movie("1")]));
    }

    #[tokio::test(start_paused = true)]
    async fn cache_expires_after_ttl() {
        let cache = ListingCache::new(Duration::from_secs(60));
        cache.put(vec![movie("1")]);

        tokio::time::advance(Duration::from_secs(60)).await;

        assert!(cache.get().is_none());
        assert!(cache.entry.read().is_none());
    }

    #[test]
    fn zero_ttl_disables_cache() {
        let cache = ListingCache::new(Duration::ZERO);
        assert!(!cache.is_enabled());

        cache.put(vec![movie("1")]);

        assert!(cache.get().is_none());
    }

    #[test]
    fn invalidate_drops_entry() {
        let cache = ListingCache::default();
        assert_eq!(cache.ttl(), DEFAULT_LISTING_TTL);
        cache.put(vec![movie("1")]);

        cache.invalidate();

        assert!(cache.get().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cached_catalog_serves_second_listing_from_cache() {
        let inner = ScriptedCatalog::with_listings(vec![Ok(vec![movie("1")])]);
        let catalog = CachedMovieCatalog::new(inner.clone(), ListingCache::default());

        let first = catalog.list_movies().await.unwrap();
        let second = catalog.list_movies().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(inner.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cached_catalog_refreshes_after_expiry() {
        let inner = ScriptedCatalog::with_listings(vec![
            Ok(vec![movie("1")]),
            Ok(vec![movie("2")]),
        ]);
        let catalog =
            CachedMovieCatalog::new(inner.clone(), ListingCache::new(Duration::from_secs(10)));

        catalog.list_movies().await.unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;
        let refreshed = catalog.list_movies().await.unwrap();

        assert_eq!(refreshed, vec![movie("2")]);
        assert_eq!(inner.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cached_catalog_coalesces_concurrent_misses() {
        let inner = ScriptedCatalog::with_delayed_listings(
            vec![Ok(vec![movie("1")]), Ok(vec![movie("2")])],
            Duration::from_secs(1),
        );
        let catalog = CachedMovieCatalog::new(inner.clone(), ListingCache::default());

        let (first, second, third) = tokio::join!(
            catalog.list_movies(),
            catalog.list_movies(),
            catalog.list_movies()
        );

        assert_eq!(first.unwrap(), vec![movie("1")]);
        assert_eq!(second.unwrap(), vec![movie("1")]);
        assert_eq!(third.unwrap(), vec![movie("1")]);
        assert_eq!(inner.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn disabled_cache_forwards_every_listing() {
        let inner =
            ScriptedCatalog::with_listings(vec![Ok(vec![movie("1")]), Ok(vec![movie("2")])]);
        let catalog = CachedMovieCatalog::new(inner.clone(), ListingCache::new(Duration::ZERO));

        assert_eq!(catalog.list_movies().await.unwrap(), vec![movie("1")]);
        assert_eq!(catalog.list_movies().await.unwrap(), vec![movie("2")]);
        assert_eq!(inner.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cached_catalog_does_not_cache_failures() {
        let inner = ScriptedCatalog::with_listings(vec![
            Err(ApplicationError::all_providers_unavailable(Vec::new())),
            Ok(vec![movie("1")]),
        ]);
        let catalog = CachedMovieCatalog::new(inner.clone(), ListingCache::default());

        assert!(catalog.list_movies().await.unwrap_err().is_unavailable());
        assert_eq!(catalog.list_movies().await.unwrap(), vec![movie("1")]);
        assert_eq!(inner.list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cached_catalog_always_forwards_detail_lookups() {
        let inner = ScriptedCatalog::with_listings(Vec::new());
        let catalog = CachedMovieCatalog::new(inner.clone(), ListingCache::default());

        assert!(catalog.movie_by_id("1").await.unwrap_err().is_not_found());
        assert!(catalog.movie_by_id("1").await.unwrap_err().is_not_found());
        assert_eq!(inner.detail_calls.load(Ordering::SeqCst), 2);
    }
}
