//! In-memory keyed rate limiter using the governor crate.

use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter as GovernorRateLimiter};

use cinecraft_core::ports::{RateDecision, RateLimiter};

type KeyedGovernor = GovernorRateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window, per key.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window: Duration::from_secs(60),
        }
    }
}

/// Per-key (client IP) rate limiter backed by governor's GCRA state.
///
/// Limits are per-process, not distributed across instances.
pub struct KeyedRateLimiter {
    limiter: KeyedGovernor,
    clock: DefaultClock,
}

impl KeyedRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests.max(1)).unwrap_or(NonZeroU32::MIN);
        let period = config
            .window
            .checked_div(config.max_requests.max(1))
            .unwrap_or(Duration::from_secs(1));
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_minute(burst))
            .allow_burst(burst);

        Self {
            limiter: GovernorRateLimiter::keyed(quota),
            clock: DefaultClock::default(),
        }
    }
}

impl RateLimiter for KeyedRateLimiter {
    fn check(&self, key: &str) -> RateDecision {
        match self.limiter.check_key(&key.to_string()) {
            Ok(_) => RateDecision {
                allowed: true,
                retry_after_secs: 0,
            },
            Err(not_until) => RateDecision {
                allowed: false,
                retry_after_secs: not_until.wait_time_from(self.clock.now()).as_secs().max(1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_within_quota() {
        let limiter = KeyedRateLimiter::new(RateLimitConfig {
            max_requests: 5,
            window: Duration::from_secs(60),
        });

        for _ in 0..5 {
            assert!(limiter.check("10.0.0.1").allowed);
        }
    }

    #[test]
    fn test_denies_beyond_quota_with_retry_hint() {
        let limiter = KeyedRateLimiter::new(RateLimitConfig {
            max_requests: 2,
            window: Duration::from_secs(60),
        });

        assert!(limiter.check("10.0.0.2").allowed);
        assert!(limiter.check("10.0.0.2").allowed);

        let denied = limiter.check("10.0.0.2");
        assert!(!denied.allowed);
        assert!(denied.retry_after_secs >= 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = KeyedRateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_secs(60),
        });

        assert!(limiter.check("10.0.0.3").allowed);
        assert!(!limiter.check("10.0.0.3").allowed);
        assert!(limiter.check("10.0.0.4").allowed);
    }
}
