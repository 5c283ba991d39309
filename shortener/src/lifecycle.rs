//! Sign-in and sign-out writes to persisted state.
//!
//! Both paths touch the credential record and the session cache together, so
//! a cached profile from a previous user can never outlive a login or logout.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::cache;
use crate::credentials::CredentialRecord;
use crate::resolver::SessionState;
use crate::store::KeyValueStore;
use crate::types::TokenBundle;

/// Persist credentials from a successful login or registration and return
/// the resulting session state.
pub fn sign_in(
    durable: &impl KeyValueStore,
    session: &impl KeyValueStore,
    username: &str,
    bundle: &TokenBundle,
) -> SessionState {
    let record = CredentialRecord::from_tokens(username, bundle);
    record.save(durable);
    cache::clear(session);
    tracing::info!(username = %record.username, has_user_id = record.user_id.is_some(), "signed in");
    SessionState::Authenticated { username: record.username }
}

/// Replace the tokens of an existing record after a refresh, keeping the
/// stored username.
pub fn replace_tokens(durable: &impl KeyValueStore, current: &CredentialRecord, bundle: &TokenBundle) -> CredentialRecord {
    let mut record = CredentialRecord::from_tokens(&current.username, bundle);
    if record.user_id.is_none() {
        record.user_id.clone_from(&current.user_id);
    }
    record.save(durable);
    record
}

/// Erase the credential record and the session cache.
pub fn sign_out(durable: &impl KeyValueStore, session: &impl KeyValueStore) -> SessionState {
    CredentialRecord::erase(durable);
    cache::clear(session);
    tracing::info!("signed out");
    SessionState::Unauthenticated
}
