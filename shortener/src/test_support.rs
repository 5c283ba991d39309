//! Fixtures shared by unit tests in this crate.

use std::cell::Cell;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::ApiError;
use crate::resolver::{AuthApi, Clock};
use crate::types::AuthResponse;

/// Build an unsigned JWT-shaped token around `claims`.
pub fn fake_jwt(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

/// Token for `username` expiring at `exp` seconds since the epoch.
pub fn token_expiring_at(username: &str, exp: i64) -> String {
    fake_jwt(&serde_json::json!({
        "sub": username,
        "userid": 42,
        "type": "ACCESS",
        "exp": exp,
    }))
}

pub fn profile(username: &str) -> AuthResponse {
    AuthResponse {
        success: true,
        message: Some("User found".to_owned()),
        username: Some(username.to_owned()),
        role: Some("ROLE_USER".to_owned()),
        token: None,
    }
}

/// Settable clock in milliseconds.
pub struct FixedClock(pub Cell<i64>);

impl FixedClock {
    pub fn at(now_ms: i64) -> Self {
        Self(Cell::new(now_ms))
    }

    pub fn advance(&self, delta_ms: i64) {
        self.0.set(self.0.get() + delta_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0.get()
    }
}

/// `AuthApi` that returns a canned outcome and counts calls.
pub struct FakeAuthApi {
    pub outcome: Result<AuthResponse, ApiError>,
    pub calls: Cell<usize>,
    pub last_token: std::cell::RefCell<Option<String>>,
}

impl FakeAuthApi {
    pub fn ok(profile: AuthResponse) -> Self {
        Self { outcome: Ok(profile), calls: Cell::new(0), last_token: std::cell::RefCell::new(None) }
    }

    pub fn failing(err: ApiError) -> Self {
        Self { outcome: Err(err), calls: Cell::new(0), last_token: std::cell::RefCell::new(None) }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn current_user(&self, access_token: &str) -> Result<AuthResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = Some(access_token.to_owned());
        self.outcome.clone()
    }
}
