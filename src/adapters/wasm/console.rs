use js_sys::Array;
use wasm_bindgen::JsValue;

use crate::ports::{ConsolePort, ConsoleRecord};

/// Console mirror backed by the host's `console.log`. Each part of the record
/// is passed as its own argument.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for Console {
    fn write(&self, record: &ConsoleRecord) {
        let args = Array::new();
        if let Some(prefix) = &record.prefix {
            args.push(&JsValue::from_str(prefix));
        }
        args.push(&JsValue::from_str(&record.level));
        args.push(&JsValue::from_str(&record.timestamp));
        args.push(&JsValue::from_str(&record.message));
        for param in &record.params {
            args.push(&JsValue::from_str(param.to_loggable()));
        }
        web_sys::console::log(&args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogParam;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_console_write() {
        Console::new().write(&ConsoleRecord {
            prefix: Some("[GistMate]".to_string()),
            level: "[DEBUG]".to_string(),
            timestamp: "[2024-01-01 00:00:00.000]".to_string(),
            message: "hello".to_string(),
            params: vec![LogParam::from(1)],
        });
    }
}
