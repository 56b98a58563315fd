use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Tracked usernames before `check` starts pruning replenished keys
pub const PRUNE_THRESHOLD: usize = 1024;

/// Keyed login throttle. Bursts up to `max_attempts`, then refills one
/// attempt every `window_secs / max_attempts`.
pub struct LoginRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
    /// Key count that triggers the next prune; grows while keys are still live
    next_prune_at: AtomicUsize,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .map(|quota| quota.allow_burst(burst))
            .unwrap_or_else(|| Quota::per_minute(burst));

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
            next_prune_at: AtomicUsize::new(PRUNE_THRESHOLD),
        }
    }

    /// Consume one attempt for `username` (case-insensitive)
    #[track_caller]
    pub fn check(&self, username: &str) -> AuthErrorResult<()> {
        if self.limiter.len() >= self.next_prune_at.load(Ordering::Relaxed) {
            self.prune();
        }

        let key = username.trim().to_lowercase();
        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_attempts,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for keys whose quota has fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        let live = self.limiter.len();
        self.next_prune_at
            .store(PRUNE_THRESHOLD.max(live.saturating_mul(2)), Ordering::Relaxed);
    }

    /// Usernames currently tracked
    pub fn len(&self) -> usize {
        self.limiter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limiter.is_empty()
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
