// Application state shared by every handler.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::host::HostStats;
use crate::sampler::MetricsSampler;

#[derive(Clone)]
pub struct AppState {
    pub sampler: MetricsSampler,
    pub start_time: Instant,
    ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(host: Arc<dyn HostStats>) -> Self {
        Self {
            sampler: MetricsSampler::new(host),
            start_time: Instant::now(),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    /// Flip readiness once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Relaxed);
        tracing::info!("backend marked as ready");
    }
}
