//! Response models for the cache HTTP front-end
//!
//! Request bodies are raw bytes, so only responses need DTOs.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, SetResponse, StatsResponse};
