//! Cache Module
//!
//! In-memory byte cache with active TTL expiry by a background reaper.

mod entry;
mod handle;
mod json;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
