//! Cache Entry Module
//!
//! Defines a single stored value together with its insertion timestamp.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored value and the moment it was inserted.
///
/// The value is opaque to the cache: it is never inspected or validated.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Bytes,
    /// Monotonic insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion timestamp.
    pub fn with_created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero when `now` precedes the insertion time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live.
    /// Only a strictly greater age makes it eligible for reaping.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
