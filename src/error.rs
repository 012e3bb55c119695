//! Error types for the cache
//!
//! `add` and `get` cannot fail. These variants cover construction,
//! configuration, the JSON helpers and the HTTP front-end.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and its HTTP front-end.
#[derive(Error, Debug)]
pub enum CacheError {
    /// TTL of zero, or too large to schedule, at construction
    #[error("Invalid TTL {0:?}: must be greater than zero and schedulable")]
    InvalidTtl(Duration),

    /// Cache constructed outside a Tokio runtime
    #[error("No Tokio runtime available to run the cache reaper")]
    NoRuntime,

    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Configuration value could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidTtl(_) | CacheError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            CacheError::Serialization(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CacheError::NoRuntime | CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
