use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    InvalidLevel(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::InvalidLevel(value) => write!(f, "Invalid log level: {value}"),
        }
    }
}

impl std::error::Error for LoggingError {}

impl LoggingError {
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggingError::InvalidLevel(value.into())
    }
}
