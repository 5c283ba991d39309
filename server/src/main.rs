mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let http = shortener::http::build_client(config.request_timeout).expect("http client init failed");

    let addr = config.bind_addr();
    tracing::info!(api = %config.api_base_url, timeout_secs = config.request_timeout.as_secs(), "backend configured");

    let state = state::AppState::new(config, http);
    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "url-shortener listening");
    axum::serve(listener, app).await.expect("server failed");
}
