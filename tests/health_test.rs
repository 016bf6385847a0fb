// Health endpoint integration tests, driven through the real router with a
// fake host so no host queries are made.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hostmetrics_backend::host::FakeHost;
use hostmetrics_backend::state::AppState;

fn test_state() -> AppState {
    AppState::new(Arc::new(FakeHost::new()))
}

/// Collect a response body into a `serde_json::Value`.
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(state: AppState, uri: &str) -> axum::response::Response {
    hostmetrics_backend::create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let response = get(test_state(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_returns_json_with_status_field() {
    let state = test_state();
    state.mark_ready();
    let json = body_json(get(state, "/api/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn readiness_endpoint_tracks_mark_ready() {
    let state = test_state();
    let response = get(state.clone(), "/api/health/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    state.mark_ready();
    let response = get(state, "/api/health/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ready"], true);
}

#[tokio::test]
async fn nonexistent_route_returns_404() {
    let response = get(test_state(), "/api/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
