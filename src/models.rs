use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub app: String,
    pub uptime_seconds: u64,
}

// ---------------------------------------------------------------------------
// Sysinfo snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CpuSnapshot {
    pub model: String,
    pub count: usize,
    /// e.g. `"2400 MHz"`
    pub speed: String,
    /// Cumulative non-idle share of core 0, e.g. `"12.34%"`.
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    pub total: String,
    pub used: String,
    pub free: String,
    pub usage_percent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SystemSnapshot {
    pub platform: String,
    pub release: String,
    pub hostname: String,
    /// `"{d}d {h}h {m}m {s}s"`
    pub uptime: String,
}

/// A fully populated point-in-time reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Snapshot {
    /// ISO-8601 UTC, captured at collection time.
    pub timestamp: String,
    pub cpu: CpuSnapshot,
    pub memory: MemorySnapshot,
    pub system: SystemSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SnapshotFailure {
    pub message: String,
    pub error: String,
}

/// Result of one collection, tagged on the wire by `status`.
///
/// ```json
/// { "status": "success", "timestamp": "...", "cpu": {...}, "memory": {...}, "system": {...} }
/// { "status": "error", "message": "...", "error": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status")]
pub enum Envelope {
    #[serde(rename = "success")]
    Success(Snapshot),
    #[serde(rename = "error")]
    Failure(SnapshotFailure),
}

impl Envelope {
    pub const FAILURE_MESSAGE: &'static str = "Failed to retrieve system metrics";

    pub fn failure(error: &impl std::fmt::Display) -> Self {
        Envelope::Failure(SnapshotFailure {
            message: Self::FAILURE_MESSAGE.to_string(),
            error: error.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }
}
