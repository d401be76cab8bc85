use std::sync::Arc;

use wasm_bindgen::prelude::*;

use super::converters::{js_value_to_cause, js_values_to_params};
use crate::adapters::wasm::JsChannelProvider;
use crate::domain::logging::LogLevel;
use crate::platform::Platform;

/// Binds a `{ name, createChannel(name) }` provider to the logger.
/// A missing level or debugging flag keeps the current value.
#[wasm_bindgen]
pub fn configure_logger(
    provider: JsValue,
    level: Option<String>,
    debugging: Option<bool>,
) -> Result<(), JsValue> {
    let provider = JsChannelProvider::from_provider(provider)?;
    let level = level.map(|level| level.parse::<LogLevel>()).transpose()?;
    Platform::new()
        .logger()
        .configure(Arc::new(provider), level, debugging);
    Ok(())
}

#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level: LogLevel = level.parse()?;
    Platform::new().logger().set_log_level(level);
    Ok(())
}

#[wasm_bindgen]
pub fn log_level() -> String {
    Platform::new().logger().log_level().as_str().to_string()
}

#[wasm_bindgen]
pub fn is_debugging() -> bool {
    Platform::new().logger().is_debugging()
}

#[wasm_bindgen]
pub fn show_output_channel(preserve_focus: Option<bool>) {
    Platform::new().logger().show_output_channel(preserve_focus);
}

#[wasm_bindgen]
pub fn log_debug(message: &str, params: Vec<JsValue>) {
    Platform::new()
        .logger()
        .debug(message, &js_values_to_params(&params));
}

#[wasm_bindgen]
pub fn log_info(message: &str, params: Vec<JsValue>) {
    Platform::new()
        .logger()
        .log(message, &js_values_to_params(&params));
}

#[wasm_bindgen]
pub fn log_warn(message: &str, params: Vec<JsValue>) {
    Platform::new()
        .logger()
        .warn(message, &js_values_to_params(&params));
}

/// `cause` may be a JS `Error`, any other value, or `undefined`.
#[wasm_bindgen]
pub fn log_error(message: &str, cause: JsValue, params: Vec<JsValue>) {
    Platform::new().logger().error(
        message,
        js_value_to_cause(&cause),
        &js_values_to_params(&params),
    );
}
