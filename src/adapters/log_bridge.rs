//! Routes records from the `log` facade into a [`Logger`], so messages from
//! dependencies such as `reqwest` land in the same output channel.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;

use crate::domain::logging::{LogLevel, LogParam, Logger};

static BRIDGE: OnceCell<LogBridge> = OnceCell::new();

pub struct LogBridge {
    logger: &'static Logger,
}

impl LogBridge {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.is_debugging() || self.logger.log_level().allows(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let params = [LogParam::text(record.target())];
        match LogLevel::from(record.level()) {
            LogLevel::Error => self.logger.error(&message, None, &params),
            LogLevel::Warn => self.logger.warn(&message, &params),
            LogLevel::Info => self.logger.log(&message, &params),
            LogLevel::Debug | LogLevel::Off => self.logger.debug(&message, &params),
        }
    }

    fn flush(&self) {}
}

/// Installs the bridge as the `log` crate's global logger. Fails if another
/// logger was installed first.
pub fn install_log_bridge(logger: &'static Logger) -> Result<(), SetLoggerError> {
    let bridge = BRIDGE.get_or_init(|| LogBridge::new(logger));
    log::set_logger(bridge)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
