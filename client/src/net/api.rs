//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser, where the credentials live.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages turn failures into
//! notification text and never panic during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use shortener::requests::{self, ApiRequest};
use shortener::types::{
    AuthResponse, CreateShortUrlResponse, CreateUrlRequest, LoginRequest, RegisterRequest, TokenBundle, UrlMapping,
};
use shortener::{ApiError, AuthApi, CredentialRecord};

use crate::config;

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(feature = "hydrate")]
async fn send(request: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match request.method {
        requests::Method::Get => Method::GET,
        requests::Method::Post => Method::POST,
        requests::Method::Delete => Method::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in request.headers() {
        builder = builder.header(name, &value);
    }
    let built = match &request.body {
        Some(body) => builder.body(body.to_string()),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    built.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_json<T: serde::de::DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&request).await?;
        check_status(resp.status())?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

async fn send_empty(request: ApiRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&request).await?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(req: &LoginRequest) -> Result<TokenBundle, ApiError> {
    send_json(requests::login(config::api_base_url(), req)).await
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the
/// registration.
pub async fn register(req: &RegisterRequest) -> Result<TokenBundle, ApiError> {
    send_json(requests::register(config::api_base_url(), req)).await
}

/// `GET /api/auth/me` with `access_token` as bearer credential.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures, non-2xx statuses, or a
/// malformed body.
pub async fn fetch_current_user(access_token: &str) -> Result<AuthResponse, ApiError> {
    send_json(requests::current_user(config::api_base_url(), access_token)).await
}

/// Best-effort `POST /api/auth/logout`; the backend keeps no session state.
pub async fn logout() {
    if let Err(e) = send_empty(requests::logout(config::api_base_url())).await {
        tracing::debug!(error = %e, "logout notification failed");
    }
}

/// `POST /api/urls`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails; a 2xx body with
/// `success: false` is returned as `Ok` for the caller to report.
pub async fn create_short_url(
    credentials: &CredentialRecord,
    req: &CreateUrlRequest,
) -> Result<CreateShortUrlResponse, ApiError> {
    send_json(requests::create_short_url(config::api_base_url(), credentials, req)).await
}

/// `GET /api/urls` for the current user.
///
/// # Errors
///
/// Returns an [`ApiError`] if the list cannot be fetched.
pub async fn list_urls(user_id: Option<&str>) -> Result<Vec<UrlMapping>, ApiError> {
    send_json(requests::list_urls(config::api_base_url(), user_id)).await
}

/// `DELETE /api/urls/{short_code}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend does not confirm the deletion.
pub async fn delete_url(user_id: Option<&str>, short_code: &str) -> Result<(), ApiError> {
    send_empty(requests::delete_url(config::api_base_url(), user_id, short_code)).await
}

/// [`AuthApi`] used by the session resolver in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAuthApi;

#[async_trait(?Send)]
impl AuthApi for BrowserAuthApi {
    async fn current_user(&self, access_token: &str) -> Result<AuthResponse, ApiError> {
        fetch_current_user(access_token).await
    }
}
