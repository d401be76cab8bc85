#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod platform;

pub mod config;
pub mod context;
pub mod extension;
pub mod facades;

pub use config::{ExtensionMode, Settings};
pub use context::{ExtensionContext, HostServices};
pub use domain::commands::{CommandError, CommandId, CommandOutcome, HostError};
pub use domain::logging::{Cause, LogLevel, LogParam, Logger};
pub use extension::Extension;
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
