use js_sys::JSON;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::domain::logging::{Cause, LogParam};

/// Renders a JS value the way the logger renders parameters: strings as-is,
/// errors as their message, objects as indented JSON.
pub fn js_value_to_param(value: &JsValue) -> LogParam {
    if let Some(text) = value.as_string() {
        return LogParam::Text(text);
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return LogParam::Error(String::from(error.message()));
    }
    if value.is_object() {
        let json = JSON::stringify_with_replacer_and_space(value, &JsValue::NULL, &JsValue::from(2))
            .ok()
            .and_then(|json| json.as_string());
        return match json {
            Some(json) => LogParam::Structured(json),
            None => LogParam::Structured(js_string(value)),
        };
    }
    LogParam::Value(js_string(value))
}

pub fn js_values_to_params(values: &[JsValue]) -> Vec<LogParam> {
    values.iter().map(js_value_to_param).collect()
}

/// `undefined` means no cause; a JS `Error` is an error cause.
pub fn js_value_to_cause(value: &JsValue) -> Option<Cause> {
    if value.is_undefined() {
        return None;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => Some(Cause::error_message(String::from(error.message()))),
        None => Some(Cause::Param(js_value_to_param(value))),
    }
}

/// JS `String(value)`.
fn js_string(value: &JsValue) -> String {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("String"))
        .ok()
        .and_then(|string| string.dyn_into::<js_sys::Function>().ok())
        .and_then(|string| string.call1(&JsValue::NULL, value).ok())
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}
