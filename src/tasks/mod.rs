//! Background Tasks Module
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per TTL interval

mod reaper;

pub use reaper::spawn_reaper;
