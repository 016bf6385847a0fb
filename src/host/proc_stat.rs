use super::{CpuTimes, HostQueryFailure};

/// Parse the per-core `cpuN` lines of `/proc/stat`.
///
/// The aggregate `cpu` line and every non-CPU line are skipped. Columns are
/// user, nice, system, idle, iowait, irq, softirq, steal, guest, guest_nice;
/// only user, nice, system, idle and irq are kept. Kernels older than 2.6
/// report only four fields; a missing irq column reads as zero.
pub fn parse_proc_stat(contents: &str) -> Result<Vec<CpuTimes>, HostQueryFailure> {
    let mut cores = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            continue;
        };
        let Some(index) = label.strip_prefix("cpu") else {
            continue;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        let values = fields
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HostQueryFailure::ProcStat {
                line: idx + 1,
                reason: format!("{label}: {e}"),
            })?;
        if values.len() < 4 {
            return Err(HostQueryFailure::ProcStat {
                line: idx + 1,
                reason: format!("{label}: expected at least 4 counters, found {}", values.len()),
            });
        }

        cores.push(CpuTimes {
            user: values[0],
            nice: values[1],
            system: values[2],
            idle: values[3],
            irq: values.get(5).copied().unwrap_or(0),
        });
    }

    Ok(cores)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
cpu  4705 356 584 3699176 23060 0 277 0 0 0
cpu0 1393 280 254 1849502 12048 0 218 0 0 0
cpu1 3312 76 330 1849674 11012 0 59 0 0 0
intr 114930548 113199788 3 0 5 263 0 4 [... lots more numbers ...]
ctxt 1990473
btime 1062191376
processes 2915
procs_running 1
procs_blocked 0
";

    #[test]
    fn parses_per_core_lines_only() {
        let cores = parse_proc_stat(SAMPLE).unwrap();
        assert_eq!(cores.len(), 2);
        assert_eq!(
            cores[0],
            CpuTimes {
                user: 1393,
                nice: 280,
                system: 254,
                idle: 1849502,
                irq: 0,
            }
        );
        assert_eq!(cores[1].user, 3312);
        assert_eq!(cores[1].idle, 1849674);
    }

    #[test]
    fn short_legacy_lines_default_missing_buckets() {
        let cores = parse_proc_stat("cpu0 10 20 30 40\n").unwrap();
        assert_eq!(cores[0].total(), 100);
        assert_eq!(cores[0].irq, 0);
    }

    #[test]
    fn iowait_softirq_and_steal_are_not_accounted() {
        let cores = parse_proc_stat("cpu0 10 0 10 50 1000 30 2000 3000 0 0\n").unwrap();
        assert_eq!(cores[0].irq, 30);
        assert_eq!(cores[0].total(), 100);
        assert!((cores[0].usage_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_truncated_core_line() {
        let err = parse_proc_stat("cpu  1 2 3 4\ncpu0 1 2 3\n").unwrap_err();
        assert!(matches!(err, HostQueryFailure::ProcStat { line: 2, .. }));
    }

    #[test]
    fn rejects_non_numeric_counter() {
        let err = parse_proc_stat("cpu0 1 2 x 4\n").unwrap_err();
        assert!(err.to_string().contains("cpu0"));
    }

    #[test]
    fn ignores_lookalike_labels() {
        let cores = parse_proc_stat("cpufreq 1 2 3 4\ncpu 1 2 3 4\n").unwrap();
        assert!(cores.is_empty());
    }
}
