use super::{CpuIdentity, CpuTimes, HostQueryFailure, HostStats, MemoryStats, SystemIdentity};

const GIB: u64 = 1024 * 1024 * 1024;

/// Which query a [`FakeHost`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingQuery {
    CpuTimes,
    CpuIdentity,
    Memory,
    SystemIdentity,
}

/// Deterministic in-memory host.
///
/// Defaults to a 4-core linux box with 16 GiB total / 8 GiB free memory and
/// an uptime of 3661 seconds. Every core reports 40% cumulative usage.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub cpu_times: Vec<CpuTimes>,
    pub cpu_identity: CpuIdentity,
    pub memory: MemoryStats,
    pub system: SystemIdentity,
    pub failing: Option<FailingQuery>,
}

impl Default for FakeHost {
    fn default() -> Self {
        let core = CpuTimes {
            user: 300,
            system: 100,
            idle: 600,
            ..Default::default()
        };
        Self {
            cpu_times: vec![core; 4],
            cpu_identity: CpuIdentity {
                model: "Fake CPU @ 2.40GHz".to_string(),
                speed_mhz: 2400,
                logical_cores: 4,
            },
            memory: MemoryStats {
                total: 16 * GIB,
                free: 8 * GIB,
            },
            system: SystemIdentity {
                platform: "linux".to_string(),
                release: "6.1.0-test".to_string(),
                hostname: "fakehost".to_string(),
                uptime_secs: 3661,
            },
            failing: None,
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `query` fail with a permission error.
    pub fn failing(mut self, query: FailingQuery) -> Self {
        self.failing = Some(query);
        self
    }

    fn check(&self, query: FailingQuery) -> Result<(), HostQueryFailure> {
        if self.failing != Some(query) {
            return Ok(());
        }
        let reason = "permission denied".to_string();
        Err(match query {
            FailingQuery::CpuTimes => HostQueryFailure::CpuTimes(reason),
            FailingQuery::CpuIdentity => HostQueryFailure::CpuIdentity(reason),
            FailingQuery::Memory => HostQueryFailure::Memory(reason),
            FailingQuery::SystemIdentity => HostQueryFailure::SystemIdentity(reason),
        })
    }
}

impl HostStats for FakeHost {
    fn cpu_times(&self) -> Result<Vec<CpuTimes>, HostQueryFailure> {
        self.check(FailingQuery::CpuTimes)?;
        Ok(self.cpu_times.clone())
    }

    fn cpu_identity(&self) -> Result<CpuIdentity, HostQueryFailure> {
        self.check(FailingQuery::CpuIdentity)?;
        Ok(self.cpu_identity.clone())
    }

    fn memory(&self) -> Result<MemoryStats, HostQueryFailure> {
        self.check(FailingQuery::Memory)?;
        Ok(self.memory)
    }

    fn system_identity(&self) -> Result<SystemIdentity, HostQueryFailure> {
        self.check(FailingQuery::SystemIdentity)?;
        Ok(self.system.clone())
    }
}
