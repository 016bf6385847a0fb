// Production host backed by sysinfo, plus /proc/stat for the cumulative
// per-core counters sysinfo does not expose.
//
// Every query builds its own `System` so concurrent requests share nothing.

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use super::{CpuIdentity, CpuTimes, HostQueryFailure, HostStats, MemoryStats, SystemIdentity};

#[cfg(any(target_os = "linux", target_os = "android"))]
const PROC_STAT: &str = "/proc/stat";

/// Host queries against the machine this process runs on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoHost;

impl SysinfoHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostStats for SysinfoHost {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn cpu_times(&self) -> Result<Vec<CpuTimes>, HostQueryFailure> {
        let contents = std::fs::read_to_string(PROC_STAT)
            .map_err(|e| HostQueryFailure::CpuTimes(format!("{PROC_STAT}: {e}")))?;
        super::parse_proc_stat(&contents)
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    fn cpu_times(&self) -> Result<Vec<CpuTimes>, HostQueryFailure> {
        Err(HostQueryFailure::Unsupported("per-core CPU time counters"))
    }

    fn cpu_identity(&self) -> Result<CpuIdentity, HostQueryFailure> {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_frequency()),
        );
        let cpus = sys.cpus();
        let first = cpus
            .first()
            .ok_or_else(|| HostQueryFailure::CpuIdentity("host reported no CPUs".into()))?;

        Ok(CpuIdentity {
            model: first.brand().trim().to_string(),
            speed_mhz: first.frequency(),
            logical_cores: cpus.len(),
        })
    }

    fn memory(&self) -> Result<MemoryStats, HostQueryFailure> {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        let total = sys.total_memory();
        if total == 0 {
            return Err(HostQueryFailure::Memory(
                "host reported zero total memory".into(),
            ));
        }

        // "Free" is what the OS could hand out right now, reclaimable caches
        // included.
        Ok(MemoryStats {
            total,
            free: sys.available_memory(),
        })
    }

    fn system_identity(&self) -> Result<SystemIdentity, HostQueryFailure> {
        let release = System::kernel_version().ok_or_else(|| {
            HostQueryFailure::SystemIdentity("kernel release unavailable".into())
        })?;
        let hostname = System::host_name()
            .ok_or_else(|| HostQueryFailure::SystemIdentity("hostname unavailable".into()))?;

        Ok(SystemIdentity {
            platform: platform_id(std::env::consts::OS).to_string(),
            release,
            hostname,
            uptime_secs: System::uptime(),
        })
    }
}

/// Map Rust's `target_os` names onto the conventional platform identifiers
/// dashboards expect (`darwin`, `win32`, ...).
fn platform_id(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        "windows" => "win32",
        "solaris" | "illumos" => "sunos",
        other => other,
    }
}
