// Human-readable renderings used in the sysinfo payload.

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Scale a byte count by powers of 1024 and render it with 2 decimals.
///
/// Stops at TB: larger values are reported as a TB count above 1024.
/// Zero is the literal `"0 Bytes"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (bytes.ilog(1024) as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    format!("{:.2} {}", round_half_up(value), SIZE_UNITS[exponent])
}

/// `"{d}d {h}h {m}m {s}s"` from a second count.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / SECS_PER_DAY;
    let hours = secs % SECS_PER_DAY / SECS_PER_HOUR;
    let minutes = secs % SECS_PER_HOUR / SECS_PER_MINUTE;
    let seconds = secs % SECS_PER_MINUTE;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}

/// Two decimals and a `%` suffix. Non-finite values pass through (`"NaN%"`).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", round_half_up(value))
}

/// Round to 2 decimals with exact ties going up. `{:.2}` alone rounds ties
/// to even, so dyadic values such as 1.125 would render as "1.12".
fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 100.0).round() / 100.0
}
