pub mod config;
pub mod format;
pub mod handlers;
pub mod host;
pub mod middleware;
pub mod models;
pub mod sampler;
pub mod state;

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HostMetrics API",
        description = "Point-in-time host CPU, memory and system identity"
    ),
    paths(handlers::sysinfo, handlers::health, handlers::readiness),
    components(schemas(
        models::Envelope,
        models::Snapshot,
        models::SnapshotFailure,
        models::CpuSnapshot,
        models::MemorySnapshot,
        models::SystemSnapshot,
        models::HealthResponse,
    )),
    tags(
        (name = "system", description = "Host metrics"),
        (name = "health", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;

/// Build the application router with the given state.
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a network port.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        .route("/api/health/ready", get(handlers::readiness))
        // Metrics
        .route("/api/sysinfo", get(handlers::sysinfo))
        // Schema
        .route("/api/openapi.json", get(handlers::openapi_json))
        .with_state(state)
}
