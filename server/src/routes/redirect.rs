//! Short-link redirect route.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser cannot read the `Location` of a manual-redirect fetch, so short
//! links are resolved here: the backend is asked without following redirects
//! and its answer is replayed to the visitor.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (unknown code, non-302 status, missing `Location`, transport
//! error) renders the same "Invalid URL" page with 404. Nothing is retried.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use shortener::redirect::{self, RedirectOutcome};

use crate::state::AppState;

pub(crate) const INVALID_URL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>Invalid URL</title>
</head>
<body>
<main class="invalid-url">
<h1>Invalid URL</h1>
<p>The URL you are trying to access is invalid or has expired.</p>
<a href="/">Go to the home page</a>
</main>
</body>
</html>
"#;

/// `GET /{short_code}`: 302 to the stored URL or the "Invalid URL" page.
pub async fn follow_short_code(State(state): State<AppState>, Path(short_code): Path<String>) -> Response {
    if !redirect::is_plausible_short_code(&short_code) {
        return invalid_url();
    }

    let outcome = shortener::http::resolve_short_code(&state.http, &state.config.api_base_url, &short_code).await;
    match outcome {
        RedirectOutcome::Forward(location) => match HeaderValue::from_str(&location) {
            Ok(value) => {
                tracing::info!(%short_code, %location, "short link resolved");
                (StatusCode::FOUND, [(header::LOCATION, value)]).into_response()
            }
            Err(_) => {
                tracing::warn!(%short_code, "backend returned an unusable location");
                invalid_url()
            }
        },
        RedirectOutcome::Invalid => {
            tracing::debug!(%short_code, "short link invalid or expired");
            invalid_url()
        }
    }
}

fn invalid_url() -> Response {
    (StatusCode::NOT_FOUND, Html(INVALID_URL_PAGE)).into_response()
}
