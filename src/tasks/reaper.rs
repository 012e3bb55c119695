//! TTL Reaper Task
//!
//! Background task that periodically removes entries older than the TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reaper for one cache on the given runtime.
///
/// The sweep period equals `ttl`, and the first sweep happens one full period
/// after spawning. Each sweep holds the lock for the whole scan-and-delete
/// pass, so callers never see a partially swept map. An entry can therefore
/// live for up to `2 * ttl` before it is removed.
///
/// The task runs until its handle is aborted. Aborting can only take effect
/// while the task is sleeping or waiting for the lock, never mid-sweep.
///
/// `ttl` must be non-zero.
pub fn spawn_reaper(
    runtime: &Handle,
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
) -> JoinHandle<()> {
    let first_sweep = Instant::now() + ttl;

    runtime.spawn(async move {
        info!("Starting cache reaper with interval of {:?}", ttl);

        let mut ticker = interval_at(first_sweep, ttl);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                let removed = guard.reap_expired(Instant::now(), ttl);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Cache reaper: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Cache reaper: no expired entries found");
            }
        }
    })
}
