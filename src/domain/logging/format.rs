use chrono::{DateTime, Utc};

use super::level::LogLevel;
use super::param::{format_params, LogParam};

/// `[YYYY-MM-DD HH:MM:SS.mmm]` in UTC.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    format!("[{}]", now.format("%Y-%m-%d %H:%M:%S%.3f"))
}

/// The line written to the output channel:
/// `<timestamp> [<level>] <message>` followed by ` — <params>` when there are
/// parameters to show.
pub fn format_line(timestamp: &str, level: LogLevel, message: &str, params: &[LogParam]) -> String {
    format!("{timestamp} [{level}] {message}{}", format_params(params))
}
