//! API Handlers
//!
//! HTTP request handlers for each cache endpoint. They are thin callers of
//! `Cache::add` and `Cache::get` and add no cache semantics of their own.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, SetResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache does its own locking, so the state only needs an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Shared cache
    pub cache: Arc<Cache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must be called inside a Tokio runtime, since building the cache
    /// starts its reaper.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(Cache::new(config.ttl())?))
    }
}

/// Handler for PUT /entries/:key
///
/// Stores the request body verbatim under `key`.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Json<SetResponse> {
    let size = body.len();
    debug!("Storing {} bytes under '{}'", size, key);

    state.cache.add(key.clone(), body).await;

    Json(SetResponse::new(key, size))
}

/// Handler for GET /entries/:key
///
/// Returns the stored bytes as `application/octet-stream`, whatever their age.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    match state.cache.get(&key).await {
        Some(value) => Ok((
            [(header::CONTENT_TYPE, "application/octet-stream")],
            value,
        )
            .into_response()),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;

    Json(StatsResponse::new(&stats, state.cache.ttl()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
