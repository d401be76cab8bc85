use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LoggingError;

/// Severity threshold of the logger, ordered from most to least restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

/// Name and rank of every level. Lookups go through this table rather than
/// through the enum discriminants.
const LEVEL_TABLE: [(LogLevel, &str, u8); 5] = [
    (LogLevel::Off, "off", 0),
    (LogLevel::Error, "error", 1),
    (LogLevel::Warn, "warn", 2),
    (LogLevel::Info, "info", 3),
    (LogLevel::Debug, "debug", 4),
];

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    fn entry(self) -> &'static (LogLevel, &'static str, u8) {
        LEVEL_TABLE
            .iter()
            .find(|(level, _, _)| *level == self)
            .unwrap_or(&LEVEL_TABLE[0])
    }

    pub fn rank(self) -> u8 {
        self.entry().2
    }

    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Whether a call made at `severity` passes this threshold.
    pub fn allows(self, severity: LogLevel) -> bool {
        severity != LogLevel::Off && self.rank() >= severity.rank()
    }

    pub fn is_off(self) -> bool {
        self == LogLevel::Off
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        LEVEL_TABLE
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(needle))
            .map(|(level, _, _)| *level)
            .ok_or_else(|| LoggingError::invalid_level(value))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggingError;

    fn try_from(value: String) -> Result<Self, LoggingError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}
