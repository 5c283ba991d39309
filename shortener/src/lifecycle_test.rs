use super::*;
use crate::cache::SESSION_CACHE_KEY;
use crate::credentials::{ACCESS_TOKEN_KEY, USER_ID_KEY, USERNAME_KEY};
use crate::store::MemoryStore;
use crate::test_support::{fake_jwt, profile, token_expiring_at};

fn bundle(access_token: String) -> TokenBundle {
    TokenBundle { access_token, refresh_token: "refresh".to_owned(), token_type: None, expires_in: None }
}

#[test]
fn sign_in_saves_record_and_drops_previous_cache() {
    let durable = MemoryStore::new();
    let session = MemoryStore::new();
    cache::write(&session, &profile("previous-user"), 0);

    let state = sign_in(&durable, &session, "alice", &bundle(token_expiring_at("alice", 2_000_000_000)));

    assert_eq!(state, SessionState::authenticated("alice"));
    assert_eq!(durable.get(USERNAME_KEY).as_deref(), Some("alice"));
    assert_eq!(durable.get(USER_ID_KEY).as_deref(), Some("42"));
    assert!(!session.contains(SESSION_CACHE_KEY));
}

#[test]
fn sign_out_erases_record_and_cache() {
    let durable = MemoryStore::new();
    let session = MemoryStore::new();
    sign_in(&durable, &session, "alice", &bundle(token_expiring_at("alice", 2_000_000_000)));
    cache::write(&session, &profile("alice"), 0);

    let state = sign_out(&durable, &session);

    assert_eq!(state, SessionState::Unauthenticated);
    assert!(durable.is_empty());
    assert!(session.is_empty());
}

#[test]
fn replace_tokens_keeps_username_and_falls_back_to_known_user_id() {
    let durable = MemoryStore::new();
    let current = CredentialRecord {
        access_token: "old".to_owned(),
        refresh_token: Some("old-refresh".to_owned()),
        username: "alice".to_owned(),
        user_id: Some("42".to_owned()),
    };

    let refreshed = replace_tokens(&durable, &current, &bundle(fake_jwt(&serde_json::json!({ "exp": 5 }))));

    assert_eq!(refreshed.username, "alice");
    assert_eq!(refreshed.user_id.as_deref(), Some("42"));
    assert_eq!(refreshed.refresh_token.as_deref(), Some("refresh"));
    assert_eq!(durable.get(ACCESS_TOKEN_KEY), Some(refreshed.access_token));
}
