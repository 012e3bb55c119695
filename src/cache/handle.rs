//! Shared Cache Handle
//!
//! Couples the locked entry map with the reaper task that sweeps it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Cache ==
/// A thread-safe byte cache whose entries are removed by a background reaper
/// once they are older than the configured TTL.
///
/// Lookups never check age. An entry stays visible until a sweep finds it
/// older than the TTL, which can take up to twice the TTL after insertion.
///
/// The reaper lives as long as the cache. It stops on [`Cache::close`] or
/// when the cache is dropped. Share a cache between tasks with `Arc<Cache>`.
///
/// # Example
/// ```no_run
/// # async fn run() -> reaper_cache::error::Result<()> {
/// use std::time::Duration;
/// use reaper_cache::Cache;
///
/// let cache = Cache::new(Duration::from_secs(10))?;
/// cache.add("pokemon/1", b"pikachu".to_vec()).await;
/// assert_eq!(cache.get("pokemon/1").await.as_deref(), Some(&b"pikachu"[..]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cache {
    /// Entry map, shared with the reaper
    store: Arc<Mutex<CacheStore>>,
    /// Maximum entry age, also the sweep period
    ttl: Duration,
    /// Reaper task
    reaper: JoinHandle<()>,
    closed: AtomicBool,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current Tokio
    /// runtime. Returns immediately; the first sweep runs one `ttl` later.
    ///
    /// # Errors
    /// - [`CacheError::InvalidTtl`] if `ttl` is zero or too large to schedule
    /// - [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(ttl: Duration) -> Result<Self> {
        let schedulable = ttl
            .checked_mul(2)
            .and_then(|window| Instant::now().checked_add(window))
            .is_some();
        if ttl.is_zero() || !schedulable {
            return Err(CacheError::InvalidTtl(ttl));
        }

        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reaper(&runtime, Arc::clone(&store), ttl);

        Ok(Self {
            store,
            ttl,
            reaper,
            closed: AtomicBool::new(false),
        })
    }

    // == Add ==
    /// Inserts or replaces the value for `key`, stamped with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();

        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the value stored for `key`, or `None` if there is none.
    ///
    /// The value is returned regardless of its age.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.lock().await.get(key)
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the hit, miss and reaper counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    /// Returns the TTL this cache was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Close ==
    /// Stops the reaper. Idempotent.
    ///
    /// The map is left as it is and `add`/`get` keep working, but nothing is
    /// reaped afterwards.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.reaper.abort();
            info!("Cache reaper stopped");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
