//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client for backend lookups.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Clone is required by Axum; the config is Arc-wrapped and the client is
/// internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, http: reqwest::Client) -> Self {
        Self { config: Arc::new(config), http }
    }
}
