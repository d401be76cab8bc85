pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod param;

pub use error::LoggingError;
pub use format::{format_line, format_timestamp};
pub use level::LogLevel;
pub use logger::Logger;
pub use param::{format_params, Cause, LogParam, PARAMS_SEPARATOR};
