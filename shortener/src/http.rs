//! `reqwest` transport for [`ApiRequest`] (feature `http`).
//!
//! Used by the redirect server and the CLI. The client built here never
//! follows redirects: the backend API only redirects on short-code
//! resolution, and that response must be inspected, not followed.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::redirect::{self, RedirectOutcome};
use crate::requests::{self, ApiRequest, Method};
use crate::resolver::AuthApi;
use crate::types::AuthResponse;

/// Build the shared HTTP client.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Send `request` and return the raw response, whatever its status.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when no response was received.
pub async fn send(client: &reqwest::Client, request: &ApiRequest) -> Result<reqwest::Response, ApiError> {
    let method = match request.method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    };
    let mut builder = client.request(method, &request.url);
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }
    if let Some(body) = &request.body {
        builder = builder.body(body.to_string());
    }
    builder.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

/// Send `request`, require a 2xx status, and decode the JSON body.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] for non-2xx, or
/// [`ApiError::Decode`] for a body that does not match `T`.
pub async fn send_json<T: DeserializeOwned>(client: &reqwest::Client, request: &ApiRequest) -> Result<T, ApiError> {
    let resp = send(client, request).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send `request` and require a 2xx status, ignoring the body.
///
/// # Errors
///
/// [`ApiError::Network`] or [`ApiError::Status`].
pub async fn send_empty(client: &reqwest::Client, request: &ApiRequest) -> Result<(), ApiError> {
    let resp = send(client, request).await?;
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Ask the backend where `short_code` points. Transport failures are
/// reported as [`RedirectOutcome::Invalid`].
pub async fn resolve_short_code(client: &reqwest::Client, base_url: &str, short_code: &str) -> RedirectOutcome {
    let request = requests::resolve_short_code(base_url, short_code);
    match send(client, &request).await {
        Ok(resp) => {
            let location = resp
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|value| value.to_str().ok());
            redirect::classify(resp.status().as_u16(), location)
        }
        Err(e) => {
            tracing::warn!(%short_code, error = %e, "short code lookup failed");
            RedirectOutcome::Invalid
        }
    }
}

/// [`AuthApi`] over `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestAuthApi {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait(?Send)]
impl AuthApi for ReqwestAuthApi {
    async fn current_user(&self, access_token: &str) -> Result<AuthResponse, ApiError> {
        send_json(&self.client, &requests::current_user(&self.base_url, access_token)).await
    }
}
