//! Request throttling
//!
//! Optional client-side quota on calls to the DAB API. Every clone of
//! [`HttpClient`](super::HttpClient) draws from the same bucket.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Request quota, as written under `rate_limit:` in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    pub requests_per_second: u32,
    /// Requests allowed back to back before the per-second rate applies
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

impl RateLimiterConfig {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }

    /// The governor quota; zero values count as one
    fn quota(&self) -> Quota {
        let rate = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(rate).allow_burst(burst)
    }
}

/// Shared request bucket for one API root
#[derive(Clone)]
pub struct Throttle {
    bucket: Arc<DirectLimiter>,
}

impl Throttle {
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            bucket: Arc::new(RateLimiter::direct(config.quota())),
        }
    }

    /// Take a permit for a call to `endpoint`, waiting when the bucket is empty
    pub async fn acquire(&self, endpoint: &str) {
        if self.bucket.check().is_ok() {
            return;
        }
        debug!(endpoint, "Throttled, waiting for a request permit");
        self.bucket.until_ready().await;
    }

    /// Take a permit only if one is available now
    pub fn try_acquire(&self) -> bool {
        self.bucket.check().is_ok()
    }
}

impl std::fmt::Debug for Throttle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle").finish_non_exhaustive()
    }
}
