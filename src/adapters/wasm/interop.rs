//! Small helpers for calling into host objects handed over from JS.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::domain::commands::HostError;

pub fn property(target: &JsValue, key: &str) -> Result<JsValue, HostError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(HostError::from)
}

fn method(target: &JsValue, name: &str) -> Result<Function, HostError> {
    property(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| HostError::invalid_response(format!("host does not provide `{name}`")))
}

/// Calls `target[name](...args)` and returns the raw result.
pub fn call_method_sync(
    target: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Result<JsValue, HostError> {
    let function = method(target, name)?;
    let args: js_sys::Array = args.iter().collect();
    function.apply(target, &args).map_err(HostError::from)
}

/// Calls `target[name](...args)`, awaiting the result when it is a promise.
pub async fn call_method(
    target: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Result<JsValue, HostError> {
    let value = call_method_sync(target, name, args)?;
    match value.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await.map_err(HostError::from),
        Err(value) => Ok(value),
    }
}

pub fn is_nullish(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// Reads `key` from an object as a string; `None` for a missing object or
/// a non-string value.
pub fn string_property(target: &JsValue, key: &str) -> Result<Option<String>, HostError> {
    if is_nullish(target) {
        return Ok(None);
    }
    Ok(property(target, key)?.as_string())
}
