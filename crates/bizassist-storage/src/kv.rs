//! String-keyed value store over the kv table.
//!
//! Settings (language tag, AI flag, API key) are stored raw; structured
//! values (transcript, profile, analytics log) are stored as JSON.
//! Corrupt JSON is recovered by substituting the supplied fallback and is
//! never surfaced to the caller as an error.

use std::sync::Arc;

use rusqlite::OptionalExtension;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use bizassist_core::error::BizError;

use crate::db::Database;

/// Persisted key names, all under the `bizassist_` namespace.
pub mod keys {
    pub const CONVERSATION: &str = "bizassist_conversation";
    pub const PROFILE: &str = "bizassist_profile";
    pub const LANGUAGE: &str = "bizassist_language";
    pub const AI_ENABLED: &str = "bizassist_ai_enabled";
    pub const API_KEY: &str = "bizassist_api_key";
    pub const ANALYTICS: &str = "bizassist_analytics";
}

/// Synchronous key-value store with unbounded retention.
#[derive(Debug, Clone)]
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Read a raw string value.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, BizError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM kv WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| BizError::Storage(format!("Failed to read key {}: {}", key, e)))
        })
    }

    /// Write a raw string value (upsert).
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), BizError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%s', 'now'))
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = excluded.updated_at",
                rusqlite::params![key, value],
            )
            .map_err(|e| BizError::Storage(format!("Failed to write key {}: {}", key, e)))?;
            Ok(())
        })
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), BizError> {
        self.db.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])
                .map_err(|e| BizError::Storage(format!("Failed to remove key {}: {}", key, e)))?;
            Ok(())
        })
    }

    /// Read a JSON value, substituting `fallback` when the key is absent
    /// or holds corrupt JSON.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<T, BizError> {
        match self.get_raw(key)? {
            None => Ok(fallback),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!("Corrupt JSON under key {}: {}. Using fallback.", key, e);
                    Ok(fallback)
                }
            },
        }
    }

    /// Write a value as JSON.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), BizError> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}
