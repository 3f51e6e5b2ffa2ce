//! # Retry Policy
//!
//! Bounded exponential-backoff retry for outbound provider calls.
//!
//! The policy sits beneath the provider clients and only looks at transport
//! outcomes: a transient [`TransportError`] or a response whose status is
//! transient (429, 408, 5xx) triggers another attempt. Once retries are
//! exhausted the last outcome is returned unchanged, so the caller sees an
//! ordinary failed response or transport error.
//!
//! Delay before retry `n` (1-based) is `base_delay * 2^n`. With the default
//! one-second base and three retries that is 2s, 4s and 8s.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::infrastructure::providers::retry::RetryPolicy;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::default();
//! assert_eq!(policy.max_retries(), 3);
//! assert_eq!(policy.delay_for(1), Duration::from_secs(2));
//! assert_eq!(policy.delay_for(3), Duration::from_secs(8));
//! ```

use crate::infrastructure::providers::error::TransportResult;
use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default backoff base.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// An outcome the retry policy can classify.
pub trait Transient {
    /// Returns true if the outcome is worth another attempt.
    fn is_transient(&self) -> bool;
}

impl Transient for StatusCode {
    fn is_transient(&self) -> bool {
        *self == StatusCode::TOO_MANY_REQUESTS
            || *self == StatusCode::REQUEST_TIMEOUT
            || self.is_server_error()
    }
}

impl Transient for reqwest::Response {
    fn is_transient(&self) -> bool {
        self.status().is_transient()
    }
}

/// Exponential-backoff retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given retry budget and backoff base.
    ///
    /// # Arguments
    ///
    /// * `max_retries` - Retries after the first attempt.
    /// * `base_delay` - Backoff base; retry `n` waits `base_delay * 2^n`.
    #[must_use]
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns the number of retries after the first attempt.
    #[inline]
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the delay to wait before retry `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Returns the longest total time spent sleeping between attempts.
    #[must_use]
    pub fn max_total_delay(&self) -> Duration {
        (1..=self.max_retries).fold(Duration::ZERO, |total, attempt| {
            total.saturating_add(self.delay_for(attempt))
        })
    }

    /// Runs `operation`, retrying transient outcomes.
    ///
    /// # Arguments
    ///
    /// * `operation` - Produces one attempt each time it is called.
    ///
    /// # Errors
    ///
    /// Returns the last transport error when every attempt failed with one.
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> TransportResult<T>
    where
        T: Transient,
        F: FnMut() -> Fut,
        Fut: Future<Output = TransportResult<T>>,
    {
        let mut attempt = 0;
        loop {
            let outcome = operation().await;

            let transient = match &outcome {
                Ok(value) => value.is_transient(),
                Err(error) => error.is_retryable(),
            };
            if !transient || attempt >= self.max_retries {
                return outcome;
            }

            attempt += 1;
            let delay = self.delay_for(attempt);
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            match &outcome {
                Ok(_) => tracing::warn!(
                    attempt,
                    max_retries = self.max_retries,
                    delay_ms,
                    "transient upstream response, retrying"
                ),
                Err(error) => tracing::warn!(
                    attempt,
                    max_retries = self.max_retries,
                    delay_ms,
                    error = %error,
                    "transient transport failure, retrying"
                ),
            }
            tokio::time::sleep(delay).await;
        }
    }
}
