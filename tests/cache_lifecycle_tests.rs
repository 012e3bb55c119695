//! Integration Tests for the cache lifecycle
//!
//! Exercises the public library API: construction, concurrent use while the
//! reaper runs, and shutdown.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reaper_cache::{Cache, CacheError};

#[tokio::test]
async fn test_construction_starts_reaper() {
    let cache = Cache::new(Duration::from_millis(100)).unwrap();

    cache.add("pokemon/1", "bulbasaur").await;

    // No explicit tick: the reaper started with the cache
    tokio::time::sleep(Duration::from_millis(250)).await;

    assert_eq!(cache.get("pokemon/1").await, None);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_refreshed_entry_survives_sweeps() {
    let cache = Cache::new(Duration::from_millis(200)).unwrap();

    // Re-adding every 50ms keeps the entry younger than the ttl at each sweep
    for _ in 0..10 {
        cache.add("hot", "value").await;
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    assert_eq!(cache.get("hot").await, Some(Bytes::from_static(b"value")));
}

#[tokio::test]
async fn test_zero_ttl_is_a_configuration_error() {
    let err = Cache::new(Duration::ZERO).unwrap_err();

    assert!(matches!(err, CacheError::InvalidTtl(_)));
    assert!(err.to_string().contains("Invalid TTL"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_while_reaping() {
    let cache = Arc::new(Cache::new(Duration::from_millis(20)).unwrap());

    let mut handles = Vec::new();
    for worker in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            for round in 0..200 {
                let key = format!("key-{}", round % 16);
                let value = format!("{}:{}", key, worker);
                cache.add(key.clone(), value).await;

                if let Some(seen) = cache.get(&key).await {
                    let seen = String::from_utf8(seen.to_vec()).unwrap();
                    assert!(
                        seen.starts_with(&format!("{}:", key)),
                        "key {} returned foreign value {}",
                        key,
                        seen
                    );
                }

                if round % 50 == 0 {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }));
    }

    for handle in handles {
        handle.await.expect("worker should not panic");
    }

    assert!(cache.len().await <= 16);
}

#[tokio::test]
async fn test_close_keeps_entries_available() {
    let cache = Cache::new(Duration::from_millis(50)).unwrap();
    cache.add("kept", "value").await;

    cache.close();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(cache.is_closed());
    assert_eq!(cache.get("kept").await, Some(Bytes::from_static(b"value")));
    assert_eq!(cache.stats().await.reaped, 0);
}
