//! Timeout helpers over the millisecond clock.
//!
//! All times are `u64` milliseconds since boot as reported by
//! [`crate::clock::Clock::now_ms`].

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Milliseconds elapsed from `since` to `now`. A clock that appears to run
/// backwards yields zero rather than wrapping.
pub fn elapsed_ms(now: u64, since: u64) -> u64 {
    now.saturating_sub(since)
}

/// A point in time after which a bounded wait gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at_ms: u64,
}

impl Deadline {
    /// Deadline `timeout_ms` after `now`.
    pub fn after(now: u64, timeout_ms: u64) -> Self {
        Self {
            at_ms: now.saturating_add(timeout_ms),
        }
    }

    /// Absolute expiry time.
    pub fn at_ms(&self) -> u64 {
        self.at_ms
    }

    /// Whether `now` is at or past the deadline.
    pub fn has_expired(&self, now: u64) -> bool {
        now >= self.at_ms
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining_ms(&self, now: u64) -> u64 {
        self.at_ms.saturating_sub(now)
    }
}
