//! JSON helpers for callers that cache serialized payloads.
//!
//! The store stays opaque; these only encode before `add` and decode after
//! `get`.

use serde::{de::DeserializeOwned, Serialize};

use crate::cache::Cache;
use crate::error::Result;

impl Cache {
    /// Serializes `value` as JSON and stores the bytes under `key`.
    pub async fn add_json<T>(&self, key: impl Into<String>, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_vec(value)?;
        self.add(key, encoded).await;
        Ok(())
    }

    /// Looks up `key` and decodes the stored bytes as JSON.
    ///
    /// A miss is `Ok(None)`. Bytes that do not decode as `T` are an error,
    /// and the entry is left in place.
    pub async fn get_json<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.get(key).await {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}
