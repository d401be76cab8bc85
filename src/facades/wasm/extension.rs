use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use wasm_bindgen::prelude::*;

use super::converters::{to_js_error, to_js_value};
use crate::adapters::wasm::{JsChannelProvider, JsHost};
use crate::config::{ExtensionMode, Settings};
use crate::context::{ExtensionContext, HostServices};
use crate::domain::commands::supported_commands as command_table;
use crate::extension::Extension;
use crate::platform::Platform;

thread_local! {
    static EXTENSION: RefCell<Option<Rc<Extension>>> = const { RefCell::new(None) };
}

fn parse_settings(settings: JsValue) -> Result<Settings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(Settings::default());
    }
    serde_wasm_bindgen::from_value(settings).map_err(to_js_error)
}

/// Accepts `"production" | "development" | "test"` or the numeric values the
/// editor uses (1, 2, 3).
fn parse_mode(mode: JsValue) -> Result<ExtensionMode, JsValue> {
    if mode.is_undefined() || mode.is_null() {
        return Ok(ExtensionMode::default());
    }
    if let Some(number) = mode.as_f64() {
        return match number as u32 {
            1 => Ok(ExtensionMode::Production),
            2 => Ok(ExtensionMode::Development),
            3 => Ok(ExtensionMode::Test),
            _ => Err(JsValue::from_str(&format!("Unknown extension mode: {number}"))),
        };
    }
    serde_wasm_bindgen::from_value(mode).map_err(to_js_error)
}

fn current() -> Result<Rc<Extension>, JsValue> {
    EXTENSION
        .with(|cell| cell.borrow().clone())
        .ok_or_else(|| JsValue::from_str("Extension is not active"))
}

/// Activates the extension against a host object and returns the ids of the
/// registered commands.
#[wasm_bindgen]
pub fn activate(host: JsValue, settings: JsValue, mode: JsValue) -> Result<JsValue, JsValue> {
    let settings = parse_settings(settings)?;
    let mode = parse_mode(mode)?;

    let services = HostServices {
        secrets: Box::new(JsHost::new(host.clone())),
        editor: Box::new(JsHost::new(host.clone())),
        prompt: Box::new(JsHost::new(host.clone())),
        channels: Arc::new(JsChannelProvider::new(settings.channel_name.clone(), host)),
    };
    let context = ExtensionContext::new(services, settings).with_mode(mode);
    let extension = Extension::activate(context);

    let ids: Vec<&str> = extension.commands().iter().map(|id| id.as_str()).collect();
    let registered = to_js_value(&ids)?;
    EXTENSION.with(|cell| *cell.borrow_mut() = Some(Rc::new(extension)));
    Ok(registered)
}

/// Runs a registered command and resolves to its outcome, e.g.
/// `{ status: "gistCreated", gist: { ... } }`. Command failures resolve to
/// `{ status: "failed", message }`; only unknown commands reject.
#[wasm_bindgen]
pub async fn execute_command(command: String) -> Result<JsValue, JsValue> {
    let extension = current()?;
    let outcome = extension.execute_str(&command).await?;
    to_js_value(&outcome)
}

#[wasm_bindgen]
pub fn supported_commands() -> Result<JsValue, JsValue> {
    let ids: Vec<&str> = command_table().into_iter().map(|id| id.as_str()).collect();
    to_js_value(&ids)
}

#[wasm_bindgen]
pub fn deactivate() {
    let Some(extension) = EXTENSION.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    match Rc::try_unwrap(extension) {
        Ok(mut extension) => extension.deactivate(),
        Err(_) => Platform::new()
            .logger()
            .debug("extension deactivated while a command is running", &[]),
    }
}
