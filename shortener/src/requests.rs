//! Stateless request builder for the backend HTTP API.
//!
//! DESIGN
//! ======
//! Every builder takes the credential it needs as an argument and returns a
//! transport-neutral [`ApiRequest`]. Nothing here reads storage, so the web
//! client (`gloo-net`), the redirect server and the CLI (`reqwest`) all send
//! exactly the same requests.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use serde_json::{Value, json};

use crate::credentials::CredentialRecord;
use crate::types::{CreateUrlRequest, LoginRequest, RegisterRequest};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const USER_ID_HEADER: &str = "X-User-ID";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described backend request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    /// Sent as `X-User-ID`.
    pub user_id: Option<String>,
    pub body: Option<Value>,
    /// `false` only for short-code resolution, which must see the 302 itself.
    pub follow_redirects: bool,
}

impl ApiRequest {
    fn new(method: Method, base_url: &str, path: &str) -> Self {
        Self {
            method,
            url: format!("{}{path}", base_url.trim_end_matches('/')),
            bearer: None,
            user_id: None,
            body: None,
            follow_redirects: true,
        }
    }

    fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    fn user_id(mut self, user_id: Option<&str>) -> Self {
        self.user_id = user_id.map(str::to_owned);
        self
    }

    fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Header pairs in send order.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(3);
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        if let Some(user_id) = &self.user_id {
            headers.push((USER_ID_HEADER, user_id.clone()));
        }
        headers
    }
}

#[must_use]
pub fn login(base_url: &str, req: &LoginRequest) -> ApiRequest {
    ApiRequest::new(Method::Post, base_url, "/api/auth/login")
        .json(json!({ "username": req.username, "password": req.password }))
}

#[must_use]
pub fn register(base_url: &str, req: &RegisterRequest) -> ApiRequest {
    ApiRequest::new(Method::Post, base_url, "/api/auth/register").json(json!({
        "username": req.username,
        "password": req.password,
        "email": req.email,
    }))
}

#[must_use]
pub fn current_user(base_url: &str, access_token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, base_url, "/api/auth/me").bearer(access_token)
}

#[must_use]
pub fn validate_token(base_url: &str, access_token: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, base_url, "/api/auth/validate").bearer(access_token)
}

#[must_use]
pub fn refresh_token(base_url: &str, refresh_token: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, base_url, "/api/auth/refresh").bearer(refresh_token)
}

#[must_use]
pub fn logout(base_url: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, base_url, "/api/auth/logout")
}

#[must_use]
pub fn create_short_url(base_url: &str, credentials: &CredentialRecord, req: &CreateUrlRequest) -> ApiRequest {
    ApiRequest::new(Method::Post, base_url, "/api/urls")
        .bearer(&credentials.access_token)
        .user_id(credentials.user_id.as_deref())
        .json(json!({ "originalUrl": req.original_url }))
}

#[must_use]
pub fn list_urls(base_url: &str, user_id: Option<&str>) -> ApiRequest {
    ApiRequest::new(Method::Get, base_url, "/api/urls").user_id(user_id)
}

#[must_use]
pub fn url_stats(base_url: &str, user_id: Option<&str>, short_code: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, base_url, &format!("/api/urls/stats/{short_code}")).user_id(user_id)
}

#[must_use]
pub fn delete_url(base_url: &str, user_id: Option<&str>, short_code: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, base_url, &format!("/api/urls/{short_code}")).user_id(user_id)
}

#[must_use]
pub fn resolve_short_code(base_url: &str, short_code: &str) -> ApiRequest {
    let mut req = ApiRequest::new(Method::Get, base_url, &format!("/api/urls/{short_code}"));
    req.follow_redirects = false;
    req
}
