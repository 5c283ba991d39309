//! Wire DTOs for the auth and URL backend services.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly: token bundles are
//! snake_case, URL records are camelCase. Fields the backend may send as
//! `null` are `Option` so a sparse body still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Token pair returned by login, registration and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Access-token lifetime as reported by the backend.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Body of `/api/auth/me` and `/api/auth/validate`.
///
/// This is also the user profile stored in the session cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Username of a successful response, or `None` if the body does not
    /// describe a signed-in user.
    #[must_use]
    pub fn verified_username(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.username.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlRequest {
    #[validate(url(message = "Please enter a valid URL"))]
    pub original_url: String,
}

/// Body of `POST /api/urls`. A 2xx body may still carry `success: false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A stored short URL owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMapping {
    /// Not every backend build serializes the row id.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub original_url: String,
    /// The short code, without host.
    pub short_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub click_count: i64,
}
