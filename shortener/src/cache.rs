//! Short-lived cache of the last validated user profile.
//!
//! Lives in session-scoped storage so a reload within five minutes skips the
//! `/api/auth/me` round-trip. Entries past their lifetime are deleted on read.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;
use crate::types::AuthResponse;

pub const SESSION_CACHE_KEY: &str = "userSession";

/// Entries are fresh while strictly younger than this.
pub const SESSION_CACHE_TTL_MS: i64 = 5 * 60 * 1000;

/// Serialized form: `{ "data": <profile>, "timestamp": <ms> }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCacheEntry {
    pub data: AuthResponse,
    pub timestamp: i64,
}

impl SessionCacheEntry {
    #[must_use]
    pub fn is_fresh_at(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.timestamp) < SESSION_CACHE_TTL_MS
    }
}

/// Return the cached profile if the entry is still fresh.
///
/// Expired and unreadable entries are deleted so no later step can reuse them.
pub fn read_fresh(store: &impl KeyValueStore, now_ms: i64) -> Option<AuthResponse> {
    let raw = store.get(SESSION_CACHE_KEY)?;
    match serde_json::from_str::<SessionCacheEntry>(&raw) {
        Ok(entry) if entry.is_fresh_at(now_ms) => Some(entry.data),
        Ok(entry) => {
            tracing::debug!(age_ms = now_ms.saturating_sub(entry.timestamp), "session cache expired");
            store.delete(SESSION_CACHE_KEY);
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable session cache");
            store.delete(SESSION_CACHE_KEY);
            None
        }
    }
}

pub fn write(store: &impl KeyValueStore, profile: &AuthResponse, now_ms: i64) {
    let entry = SessionCacheEntry { data: profile.clone(), timestamp: now_ms };
    match serde_json::to_string(&entry) {
        Ok(raw) => store.set(SESSION_CACHE_KEY, &raw),
        Err(e) => tracing::warn!(error = %e, "failed to serialize session cache"),
    }
}

pub fn clear(store: &impl KeyValueStore) {
    store.delete(SESSION_CACHE_KEY);
}
