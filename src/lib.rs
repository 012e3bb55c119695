//! Reaper Cache - a concurrent in-memory byte cache with a background TTL reaper
//!
//! Entries are opaque bytes keyed by string. Lookups never check age; a
//! reaper task spawned with each cache removes entries older than the TTL
//! once per TTL interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
