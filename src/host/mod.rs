// ---------------------------------------------------------------------------
// host/ — Host introspection capability
// The sampler never talks to the OS directly; it reads through `HostStats`,
// which is backed by sysinfo + /proc/stat in production and by `FakeHost`
// in tests.
// ---------------------------------------------------------------------------

mod fake;
mod proc_stat;
mod system;

pub use fake::{FailingQuery, FakeHost};
pub use proc_stat::parse_proc_stat;
pub use system::SysinfoHost;

/// Any error raised while reading CPU, memory or system identity from the host.
///
/// The sampler treats every variant the same way: the whole snapshot fails.
#[derive(Debug, thiserror::Error)]
pub enum HostQueryFailure {
    #[error("failed to read CPU time counters: {0}")]
    CpuTimes(String),

    #[error("failed to read CPU identity: {0}")]
    CpuIdentity(String),

    #[error("failed to read memory statistics: {0}")]
    Memory(String),

    #[error("failed to read system identity: {0}")]
    SystemIdentity(String),

    #[error("{0} not available on this platform")]
    Unsupported(&'static str),

    #[error("malformed /proc/stat line {line}: {reason}")]
    ProcStat { line: usize, reason: String },

    #[error("host query task failed: {0}")]
    Task(String),
}

/// Cumulative time counters of one logical core, as of a single instant.
///
/// The bucket set is user, nice, system, idle and irq. iowait, softirq and
/// steal are not accounted. Units are whatever the host accounts in (jiffies
/// on Linux); only the ratios between buckets carry meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub irq: u64,
}

impl CpuTimes {
    /// Sum of every bucket. Widened so that no counter values can overflow.
    pub fn total(&self) -> u128 {
        [self.user, self.nice, self.system, self.idle, self.irq]
            .into_iter()
            .map(u128::from)
            .sum()
    }

    /// Non-idle share of all time since boot, in percent.
    ///
    /// Cumulative ratio from one read, not a delta between two samples.
    /// Not clamped: a core with no accounted time yields NaN.
    pub fn usage_percent(&self) -> f64 {
        100.0 - 100.0 * self.idle as f64 / self.total() as f64
    }
}

/// Static CPU identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuIdentity {
    pub model: String,
    pub speed_mhz: u64,
    pub logical_cores: usize,
}

/// Physical memory, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub total: u64,
    pub free: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemIdentity {
    pub platform: String,
    pub release: String,
    pub hostname: String,
    pub uptime_secs: u64,
}

/// Read-only host queries consumed by [`crate::sampler::MetricsSampler`].
///
/// Implementations may block (file reads, syscalls); the sampler calls them
/// from tokio's blocking pool.
pub trait HostStats: Send + Sync {
    /// Per-core cumulative time counters, core 0 first.
    fn cpu_times(&self) -> Result<Vec<CpuTimes>, HostQueryFailure>;

    fn cpu_identity(&self) -> Result<CpuIdentity, HostQueryFailure>;

    fn memory(&self) -> Result<MemoryStats, HostQueryFailure>;

    fn system_identity(&self) -> Result<SystemIdentity, HostQueryFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_every_bucket() {
        let times = CpuTimes {
            user: 1,
            nice: 2,
            system: 3,
            idle: 4,
            irq: 5,
        };
        assert_eq!(times.total(), 15);
    }

    #[test]
    fn usage_is_non_idle_share() {
        let times = CpuTimes {
            user: 300,
            system: 100,
            idle: 600,
            ..Default::default()
        };
        assert!((times.usage_percent() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn total_of_huge_counters_does_not_overflow() {
        let times = CpuTimes {
            user: u64::MAX / 2,
            idle: u64::MAX / 2 + 10,
            ..Default::default()
        };
        assert_eq!(times.total(), u128::from(u64::MAX) + 9);
        let usage = times.usage_percent();
        assert!((usage - 50.0).abs() < 1e-6, "{usage}");
    }

    #[test]
    fn usage_of_unaccounted_core_is_nan_not_panic() {
        assert!(CpuTimes::default().usage_percent().is_nan());
    }
}
