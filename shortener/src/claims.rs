//! Unverified JWT claim decoding.
//!
//! The client never holds the signing key, so claims read here are advisory:
//! they can reject an obviously expired token before a network round-trip and
//! supply the user id after login, but they never prove a token is valid.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Shape,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not a claims object: {0}")]
    Json(String),
}

/// Claims the client reads from an access token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Subject; the backend puts the username here.
    #[serde(default)]
    pub sub: Option<String>,
    /// Numeric or string user id, normalized to a string.
    #[serde(default, rename = "userid", deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<String>,
    /// `ACCESS` or `REFRESH`.
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
}

impl TokenClaims {
    #[must_use]
    pub fn expires_at_ms(&self) -> i64 {
        self.exp.saturating_mul(1000)
    }

    /// Expiry is inclusive: a token whose `exp` equals `now` is expired.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at_ms() <= now_ms
    }
}

/// Decode the payload segment of `token` without checking its signature.
///
/// # Errors
///
/// Returns [`ClaimsError`] when the token is not three dot-separated segments,
/// the payload is not base64url, or the JSON lacks a numeric `exp`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(ClaimsError::Shape);
    };
    if header.is_empty() || payload.is_empty() {
        return Err(ClaimsError::Shape);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClaimsError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) => Ok(Some(id)),
        Some(serde_json::Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(D::Error::custom(format!("unsupported user id: {other}"))),
    }
}
