use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::routing::get;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::routes::service_routes;

// =============================================================================
// FAKE BACKEND
// =============================================================================

/// Stands in for `GET /api/urls/{code}` on the backend API.
async fn fake_lookup(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "abc123" => (StatusCode::FOUND, [(header::LOCATION, "https://example.com/page")]).into_response(),
        "noloc" => StatusCode::FOUND.into_response(),
        "moved" => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "https://example.com/other")]).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/urls/{code}", get(fake_lookup));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(api_base_url: String) -> AppState {
    let config = ServerConfig { port: 0, api_base_url, request_timeout: Duration::from_secs(2) };
    let http = shortener::http::build_client(config.request_timeout).unwrap();
    AppState::new(config, http)
}

async fn get_path(router: Router, path: &str) -> Response {
    router
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// REDIRECT ROUTE
// =============================================================================

#[tokio::test]
async fn known_code_redirects_with_302() {
    let router = service_routes(state_for(spawn_backend().await));

    let resp = get_path(router, "/abc123").await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "https://example.com/page");
}

#[tokio::test]
async fn unknown_code_renders_invalid_page() {
    let router = service_routes(state_for(spawn_backend().await));

    let resp = get_path(router, "/missing").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_text(resp).await;
    assert!(body.contains("Invalid URL"));
    assert!(body.contains("The URL you are trying to access is invalid or has expired."));
}

#[tokio::test]
async fn redirect_without_location_is_invalid() {
    let router = service_routes(state_for(spawn_backend().await));
    let resp = get_path(router, "/noloc").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_302_redirect_is_invalid() {
    let router = service_routes(state_for(spawn_backend().await));
    let resp = get_path(router, "/moved").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn unreachable_backend_is_invalid() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let router = service_routes(state_for(format!("http://{addr}")));

    let resp = get_path(router, "/abc123").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn implausible_code_skips_backend() {
    let router = service_routes(state_for("http://127.0.0.1:9".to_owned()));
    let resp = get_path(router, "/favicon.ico").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Invalid URL"));
}

#[tokio::test]
async fn healthz_is_not_a_short_code() {
    let router = service_routes(state_for("http://127.0.0.1:9".to_owned()));
    let resp = get_path(router, "/healthz").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
