//! Durable credential record: tokens, username and user id.
//!
//! Each field lives under its own key so other tabs and older builds can read
//! them individually. The record is created on login/registration and erased
//! as a unit; a half-erased record never survives an invalidation.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::claims;
use crate::store::KeyValueStore;
use crate::types::TokenBundle;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USERNAME_KEY: &str = "username";
pub const USER_ID_KEY: &str = "userId";

const ALL_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, USER_ID_KEY];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialRecord {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub username: String,
    pub user_id: Option<String>,
}

impl CredentialRecord {
    /// Build a record from a fresh token bundle.
    ///
    /// The user id comes from the access token's `userid` claim; a token the
    /// client cannot decode still yields a record, without a user id.
    #[must_use]
    pub fn from_tokens(username: &str, bundle: &TokenBundle) -> Self {
        let user_id = match claims::decode_claims(&bundle.access_token) {
            Ok(claims) => claims.user_id,
            Err(e) => {
                tracing::warn!(error = %e, "access token claims unreadable; user id unavailable");
                None
            }
        };
        Self {
            access_token: bundle.access_token.clone(),
            refresh_token: Some(bundle.refresh_token.clone()).filter(|t| !t.is_empty()),
            username: username.trim().to_owned(),
            user_id,
        }
    }

    /// Load the record. Returns `None` unless both the access token and the
    /// username are present and non-empty.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let access_token = non_empty(store.get(ACCESS_TOKEN_KEY))?;
        let username = non_empty(store.get(USERNAME_KEY))?;
        Some(Self {
            access_token,
            refresh_token: non_empty(store.get(REFRESH_TOKEN_KEY)),
            username,
            user_id: non_empty(store.get(USER_ID_KEY)),
        })
    }

    /// Persist every field, removing keys for absent optional fields so a
    /// previous user's values cannot leak into this record.
    pub fn save(&self, store: &impl KeyValueStore) {
        store.set(ACCESS_TOKEN_KEY, &self.access_token);
        store.set(USERNAME_KEY, &self.username);
        match &self.refresh_token {
            Some(token) => store.set(REFRESH_TOKEN_KEY, token),
            None => store.delete(REFRESH_TOKEN_KEY),
        }
        match &self.user_id {
            Some(id) => store.set(USER_ID_KEY, id),
            None => store.delete(USER_ID_KEY),
        }
    }

    /// Remove all four keys.
    pub fn erase(store: &impl KeyValueStore) {
        for key in ALL_KEYS {
            store.delete(key);
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
