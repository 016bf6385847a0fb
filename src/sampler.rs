// ---------------------------------------------------------------------------
// sampler.rs — One-shot host metrics collection
// ---------------------------------------------------------------------------

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::format::{format_bytes, format_percent, format_uptime};
use crate::host::{CpuTimes, HostQueryFailure, HostStats};
use crate::models::{CpuSnapshot, Envelope, MemorySnapshot, Snapshot, SystemSnapshot};

/// Turns host queries into a formatted [`Envelope`].
///
/// Holds no state besides the host handle: every call queries the host
/// afresh, nothing is cached between calls and nothing is retried.
#[derive(Clone)]
pub struct MetricsSampler {
    host: Arc<dyn HostStats>,
}

impl MetricsSampler {
    pub fn new(host: Arc<dyn HostStats>) -> Self {
        Self { host }
    }

    /// Collect one snapshot. Any host failure yields [`Envelope::Failure`];
    /// a partially populated success is never produced.
    pub async fn collect(&self) -> Envelope {
        match self.collect_snapshot().await {
            Ok(snapshot) => Envelope::Success(snapshot),
            Err(e) => Envelope::failure(&e),
        }
    }

    /// Fallible form of [`Self::collect`].
    ///
    /// Host queries block, so they run on tokio's blocking pool.
    pub async fn collect_snapshot(&self) -> Result<Snapshot, HostQueryFailure> {
        let host = Arc::clone(&self.host);
        tokio::task::spawn_blocking(move || sample(host.as_ref()))
            .await
            .map_err(|e| HostQueryFailure::Task(e.to_string()))?
    }
}

fn sample(host: &dyn HostStats) -> Result<Snapshot, HostQueryFailure> {
    let times = host.cpu_times()?;
    let identity = host.cpu_identity()?;
    let usage = first_core_usage(&times)?;

    let memory = host.memory()?;
    let used = memory.total.checked_sub(memory.free).ok_or_else(|| {
        HostQueryFailure::Memory(format!(
            "free memory ({} bytes) exceeds total ({} bytes)",
            memory.free, memory.total
        ))
    })?;
    let used_percent = used as f64 / memory.total as f64 * 100.0;

    let system = host.system_identity()?;

    Ok(Snapshot {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        cpu: CpuSnapshot {
            model: identity.model,
            count: identity.logical_cores,
            speed: format!("{} MHz", identity.speed_mhz),
            usage: format_percent(usage),
        },
        memory: MemorySnapshot {
            total: format_bytes(memory.total),
            used: format_bytes(used),
            free: format_bytes(memory.free),
            usage_percent: format_percent(used_percent),
        },
        system: SystemSnapshot {
            platform: system.platform,
            release: system.release,
            hostname: system.hostname,
            uptime: format_uptime(system.uptime_secs),
        },
    })
}

/// Only core 0 is reported; the remaining cores' counters are read but unused.
fn first_core_usage(times: &[CpuTimes]) -> Result<f64, HostQueryFailure> {
    times
        .first()
        .map(CpuTimes::usage_percent)
        .ok_or_else(|| HostQueryFailure::CpuTimes("no CPU time counters reported by host".into()))
}
