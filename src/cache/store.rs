//! Cache Store Module
//!
//! The unsynchronized entry map. [`crate::cache::Cache`] wraps it in a mutex
//! and shares it with the reaper; nothing here takes a lock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with insertion timestamps and lookup counters.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Aggregate counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.add_at(key, value, Instant::now());
    }

    /// Inserts or replaces the entry for `key` with an explicit timestamp.
    ///
    /// A replacement never moves the timestamp backwards: if `at` precedes the
    /// existing entry's timestamp, the existing timestamp is kept.
    pub fn add_at(&mut self, key: String, value: Bytes, at: Instant) {
        let created_at = match self.entries.get(&key) {
            Some(prior) if prior.created_at > at => prior.created_at,
            _ => at,
        };

        self.entries
            .insert(key, CacheEntry::with_created_at(value, created_at));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the stored value for `key`, whatever its age.
    ///
    /// Expiry is never checked here; only [`CacheStore::reap_expired`] removes
    /// stale entries.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Returns the full entry for `key` without touching the counters.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Reap Expired ==
    /// Removes every entry older than `ttl` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, ttl));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
