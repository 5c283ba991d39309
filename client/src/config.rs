//! Build-time client configuration.
//!
//! The WASM bundle cannot read the server's environment, so the backend base
//! URL is baked in at compile time from `SHORTENER_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use shortener::requests::DEFAULT_API_BASE_URL;

/// Origin used for short links when no browser location is available.
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";

/// Backend base URL without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("SHORTENER_API_BASE_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

/// Origin of the current page, used to build shareable short links.
#[must_use]
pub fn public_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_PUBLIC_URL.to_owned()
    }
}
