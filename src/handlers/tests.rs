// ---------------------------------------------------------------------------
// handlers/tests.rs — Unit tests for status mapping and health handlers
// ---------------------------------------------------------------------------

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::*;
use crate::host::{FailingQuery, FakeHost};
use crate::models::Envelope;
use crate::state::AppState;

fn state(host: FakeHost) -> AppState {
    AppState::new(Arc::new(host))
}

#[tokio::test]
async fn sysinfo_success_maps_to_200() {
    let envelope = sysinfo(State(state(FakeHost::new()))).await;
    assert!(envelope.is_success());
    assert_eq!(envelope.into_response().status(), StatusCode::OK);
}

#[tokio::test]
async fn sysinfo_failure_maps_to_500() {
    let host = FakeHost::new().failing(FailingQuery::Memory);
    let envelope = sysinfo(State(state(host))).await;
    assert_eq!(envelope.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn failure_envelope_keeps_error_description() {
    let envelope = Envelope::failure(&"EACCES: /proc/stat");
    let Envelope::Failure(failure) = envelope else {
        unreachable!()
    };
    assert_eq!(failure.error, "EACCES: /proc/stat");
}

#[tokio::test]
async fn health_reports_starting_until_ready() {
    let st = state(FakeHost::new());
    assert_eq!(health(State(st.clone())).await.status, "starting");
    st.mark_ready();
    let body = health(State(st)).await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.app, "HostMetrics");
}

#[tokio::test]
async fn readiness_is_503_before_mark_ready() {
    let st = state(FakeHost::new());
    let response = readiness(State(st.clone())).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    st.mark_ready();
    let response = readiness(State(st)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
