use wasm_bindgen::{JsCast, JsValue};

use crate::domain::commands::{CommandError, HostError};
use crate::domain::gist::GistError;
use crate::domain::logging::LoggingError;

/// Conversion from a rejected host call to HostError
impl From<JsValue> for HostError {
    fn from(err: JsValue) -> Self {
        let message = match err.dyn_ref::<js_sys::Error>() {
            Some(error) => String::from(error.message()),
            None => err
                .as_string()
                .unwrap_or_else(|| "Unknown JavaScript error".to_string()),
        };
        HostError::call_failed(message)
    }
}

impl From<HostError> for JsValue {
    fn from(error: HostError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<CommandError> for JsValue {
    fn from(error: CommandError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<GistError> for JsValue {
    fn from(error: GistError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<LoggingError> for JsValue {
    fn from(error: LoggingError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
