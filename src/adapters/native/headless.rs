//! Logger setup for native hosts that have no editor: lines go to standard
//! error under the configured channel name.

use std::sync::Arc;

use super::WriterChannelProvider;
use crate::adapters::{install_log_bridge, logger};
use crate::config::{Settings, CONFIG};
use crate::domain::logging::Logger;

/// Configures the global logger from `settings` and routes the `log` facade
/// into it.
pub fn init_logging(settings: &Settings) -> &'static Logger {
    let logger = logger();
    logger.configure(
        Arc::new(WriterChannelProvider::stderr(settings.channel_name.clone())),
        settings.log_level,
        settings.debugging,
    );
    let _ = install_log_bridge(logger);
    logger
}

/// [`init_logging`] with the `GISTMATE_*` environment settings.
pub fn init_logging_from_env() -> &'static Logger {
    init_logging(&CONFIG)
}
