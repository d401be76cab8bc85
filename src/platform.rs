//! Platform - dependency injection container for process-wide services.
//!
//! Call sites receive the logger through a `Platform` instead of reaching for
//! the global directly, so tests can hand in their own instance.

use crate::domain::logging::Logger;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static Logger,
}

impl Platform {
    /// Creates a Platform backed by the process-wide logger.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    pub fn with_logger(logger: &'static Logger) -> Self {
        Self { logger }
    }

    #[inline]
    pub fn logger(&self) -> &'static Logger {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
