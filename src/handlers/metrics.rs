// ---------------------------------------------------------------------------
// handlers/metrics.rs — GET /api/sysinfo
// ---------------------------------------------------------------------------

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::Envelope;
use crate::state::AppState;

impl Envelope {
    /// 200 for a snapshot, 500 for a failure. The body is never altered.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Envelope::Success(_) => StatusCode::OK,
            Envelope::Failure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Point-in-time CPU, memory and system identity of the host.
#[utoipa::path(get, path = "/api/sysinfo", tag = "system",
    responses(
        (status = 200, description = "Host metrics snapshot (`status` = \"success\")", body = Envelope),
        (status = 500, description = "Host query failed (`status` = \"error\")", body = Envelope)
    )
)]
pub async fn sysinfo(State(state): State<AppState>) -> Envelope {
    let envelope = state.sampler.collect().await;

    if let Envelope::Failure(failure) = &envelope {
        tracing::error!(error = %failure.error, "Error getting system metrics");
    }

    envelope
}
