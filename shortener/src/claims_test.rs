use super::*;
use crate::test_support::{fake_jwt, token_expiring_at};

#[test]
fn decode_reads_expiry_subject_and_numeric_user_id() {
    let claims = decode_claims(&token_expiring_at("alice", 1_700_000_000)).expect("claims");
    assert_eq!(claims.exp, 1_700_000_000);
    assert_eq!(claims.sub.as_deref(), Some("alice"));
    assert_eq!(claims.user_id.as_deref(), Some("42"));
    assert_eq!(claims.token_type.as_deref(), Some("ACCESS"));
}

#[test]
fn decode_accepts_string_user_id_and_missing_optionals() {
    let token = fake_jwt(&serde_json::json!({ "exp": 10, "userid": "u-9" }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.user_id.as_deref(), Some("u-9"));
    assert_eq!(claims.sub, None);
}

#[test]
fn decode_tolerates_padded_payload() {
    let token = fake_jwt(&serde_json::json!({ "exp": 1 }));
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    parts[1].push_str("==");
    let claims = decode_claims(&parts.join(".")).expect("claims");
    assert_eq!(claims.exp, 1);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("not-a-token"), Err(ClaimsError::Shape));
    assert_eq!(decode_claims("a.b"), Err(ClaimsError::Shape));
    assert_eq!(decode_claims("a.b.c.d"), Err(ClaimsError::Shape));
    assert_eq!(decode_claims(".payload.sig"), Err(ClaimsError::Shape));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode_claims("h.@@@.s"), Err(ClaimsError::Encoding(_))));
}

#[test]
fn decode_rejects_payload_without_expiry() {
    let token = fake_jwt(&serde_json::json!({ "sub": "alice" }));
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Json(_))));
}

#[test]
fn decode_rejects_unsupported_user_id_shape() {
    let token = fake_jwt(&serde_json::json!({ "exp": 1, "userid": [1, 2] }));
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Json(_))));
}

#[test]
fn expiry_is_inclusive_of_current_instant() {
    let claims = decode_claims(&token_expiring_at("alice", 100)).expect("claims");
    assert!(!claims.is_expired_at(99_999));
    assert!(claims.is_expired_at(100_000));
    assert!(claims.is_expired_at(100_001));
}
