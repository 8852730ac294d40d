//! Per-caller cooldown between analyses
//!
//! Each caller identity may start one analysis per cooldown window. Entries
//! older than the window are evicted on every check, so the map stays bounded
//! by the number of callers active within one window.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateLimitError {
    #[error("Caller '{caller}' is cooling down. Retry after {retry_after} seconds")]
    RateLimited { caller: String, retry_after: u64 },
}

pub struct CooldownLimiter {
    cooldown: Duration,
    last_seen: Mutex<HashMap<String, Instant>>,
}

impl CooldownLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_seen: Mutex::new(HashMap::new()),
        }
    }

    /// A limiter that admits every call
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        !self.cooldown.is_zero()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn check(&self, caller: &str) -> Result<(), RateLimitError> {
        self.check_at(caller, Instant::now())
    }

    /// Admits `caller` and records `now`, or reports the remaining wait
    pub fn check_at(&self, caller: &str, now: Instant) -> Result<(), RateLimitError> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut last_seen = self
            .last_seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let cooldown = self.cooldown;
        last_seen.retain(|_, seen| now.saturating_duration_since(*seen) < cooldown);

        if let Some(seen) = last_seen.get(caller) {
            let remaining = cooldown.saturating_sub(now.saturating_duration_since(*seen));
            let retry_after = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            debug!(caller, retry_after, "Caller rejected by cooldown");
            return Err(RateLimitError::RateLimited {
                caller: caller.to_string(),
                retry_after: retry_after.max(1),
            });
        }

        last_seen.insert(caller.to_string(), now);
        Ok(())
    }

    /// Number of callers currently inside their window
    pub fn tracked_callers(&self) -> usize {
        self.last_seen
            .lock()
            .map(|m| m.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }
}

impl Default for CooldownLimiter {
    fn default() -> Self {
        Self::disabled()
    }
}
