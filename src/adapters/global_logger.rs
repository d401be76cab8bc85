//! Global logger instance - built lazily on first access with the system
//! clock and the console mirror of the current target.

use crate::domain::logging::Logger;
use once_cell::sync::Lazy;

use super::shared::SystemClock;
use super::Console;

pub static LOGGER: Lazy<Logger> = Lazy::new(default_logger);

/// A fresh logger wired to the default adapters for this target.
pub fn default_logger() -> Logger {
    Logger::new(Box::new(SystemClock::new()), Box::new(Console::new()))
}

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static Logger {
    &LOGGER
}
