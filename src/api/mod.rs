//! API Module
//!
//! HTTP front-end exposing the cache to out-of-process callers.
//!
//! # Endpoints
//! - `PUT /entries/:key` - Store raw bytes under a key
//! - `GET /entries/:key` - Retrieve raw bytes by key
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
