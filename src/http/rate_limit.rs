//! Rate limiting implementation
//!
//! Uses the governor crate for token bucket rate limiting. The One API
//! allows 100 requests every 10 minutes per key, which is the default quota.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Longest period honored; longer ones are capped to it
const MAX_PERIOD_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration for rate limiting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Maximum number of requests per period
    pub max_requests: u32,
    /// Length of the period in seconds
    pub period_secs: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            period_secs: 600,
        }
    }
}

impl RateLimiterConfig {
    /// Create a new rate limiter config
    pub fn new(max_requests: u32, period_secs: u64) -> Self {
        Self {
            max_requests,
            period_secs,
        }
    }

    /// Create config for a per-second limit
    pub fn per_second(max_requests: u32) -> Self {
        Self::new(max_requests, 1)
    }

    /// Interval at which a single permit is replenished
    pub fn replenish_interval(&self) -> Duration {
        let requests = u64::from(self.max_requests.max(1));
        let period_ms = self.period_secs.clamp(1, MAX_PERIOD_SECS).saturating_mul(1000);
        Duration::from_millis((period_ms / requests).max(1))
    }
}

/// Token bucket rate limiter
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config
    ///
    /// The whole period's allowance is available as an initial burst.
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(config.replenish_interval())
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until a request can be made
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit, returning immediately
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish()
    }
}
