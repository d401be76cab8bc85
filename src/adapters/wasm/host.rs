//! Host ports implemented over the JS host object passed to `activate`.
//!
//! The host object is expected to look like:
//!
//! ```js
//! {
//!   secrets: { get(key), store(key, value) },
//!   activeDocument(),              // { fileName?, text, selectedText? } | undefined
//!   showInputBox(options),         // Promise<string | undefined>
//!   showQuickPick(items, options), // Promise<item | undefined>
//!   showInformationMessage(message, options, ...items),
//!   openExternal(url),
//!   createOutputChannel(name),     // { appendLine, show?, dispose? }
//! }
//! ```

use async_trait::async_trait;
use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use super::interop::{call_method, call_method_sync, is_nullish, property, string_property};
use crate::domain::commands::HostError;
use crate::ports::{
    ActiveDocument, EditorPort, InputBoxOptions, MessageItem, PromptPort, QuickPickItem,
    QuickPickOptions, SecretStorePort,
};

pub struct JsHost {
    host: JsValue,
}

impl JsHost {
    pub fn new(host: JsValue) -> Self {
        Self { host }
    }

    pub fn raw(&self) -> &JsValue {
        &self.host
    }
}

fn set(target: &Object, key: &str, value: impl Into<JsValue>) -> Result<(), HostError> {
    Reflect::set(target, &JsValue::from_str(key), &value.into())
        .map(|_| ())
        .map_err(HostError::from)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, HostError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| HostError::invalid_response(e.to_string()))
}

fn optional_string(value: JsValue) -> Option<String> {
    if is_nullish(&value) {
        None
    } else {
        value.as_string()
    }
}

#[async_trait(?Send)]
impl SecretStorePort for JsHost {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        let secrets = property(&self.host, "secrets")?;
        let value = call_method(&secrets, "get", &[JsValue::from_str(key)]).await?;
        Ok(optional_string(value))
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        let secrets = property(&self.host, "secrets")?;
        call_method(
            &secrets,
            "store",
            &[JsValue::from_str(key), JsValue::from_str(value)],
        )
        .await?;
        Ok(())
    }
}

impl EditorPort for JsHost {
    fn active_document(&self) -> Result<Option<ActiveDocument>, HostError> {
        let value = call_method_sync(&self.host, "activeDocument", &[])?;
        if is_nullish(&value) {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| HostError::invalid_response(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PromptPort for JsHost {
    async fn show_input_box(&self, options: InputBoxOptions) -> Result<Option<String>, HostError> {
        let js_options = Object::new();
        set(&js_options, "title", options.title.as_str())?;
        set(&js_options, "prompt", options.prompt.as_str())?;
        set(&js_options, "placeHolder", options.place_holder.as_str())?;
        set(&js_options, "value", options.value.as_str())?;
        set(&js_options, "password", options.password)?;
        set(&js_options, "ignoreFocusOut", options.ignore_focus_out)?;

        // Must outlive the prompt; dropped once the promise settles.
        let validator = options.validate.clone().map(|validate| {
            Closure::wrap(Box::new(move |value: JsValue| -> JsValue {
                let value = value.as_string().unwrap_or_default();
                match validate(&value) {
                    Ok(()) => JsValue::UNDEFINED,
                    Err(message) => JsValue::from_str(&message),
                }
            }) as Box<dyn Fn(JsValue) -> JsValue>)
        });
        if let Some(closure) = &validator {
            set(&js_options, "validateInput", closure.as_ref().clone())?;
        }

        let value = call_method(&self.host, "showInputBox", &[js_options.into()]).await;
        drop(validator);
        Ok(optional_string(value?))
    }

    async fn show_quick_pick(
        &self,
        items: &[QuickPickItem],
        options: &QuickPickOptions,
    ) -> Result<Option<String>, HostError> {
        let picked = call_method(
            &self.host,
            "showQuickPick",
            &[to_js(&items)?, to_js(options)?],
        )
        .await?;
        string_property(&picked, "value")
    }

    async fn show_information_message(
        &self,
        message: &str,
        modal: bool,
        items: &[MessageItem],
    ) -> Result<Option<String>, HostError> {
        let js_options = Object::new();
        set(&js_options, "modal", modal)?;

        let mut args = vec![JsValue::from_str(message), js_options.into()];
        for item in items {
            args.push(to_js(item)?);
        }
        let chosen = call_method(&self.host, "showInformationMessage", &args).await?;
        string_property(&chosen, "value")
    }

    async fn open_external(&self, url: &str) -> Result<(), HostError> {
        call_method(&self.host, "openExternal", &[JsValue::from_str(url)]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    fn host(source: &str) -> JsHost {
        JsHost::new(js_sys::eval(&format!("({source})")).unwrap())
    }

    #[wasm_bindgen_test]
    async fn test_secrets_round_trip_through_host() {
        let host = host(
            "{ secrets: { m: new Map(), \
               get(k) { return Promise.resolve(this.m.get(k)); }, \
               store(k, v) { this.m.set(k, v); return Promise.resolve(); } } }",
        );
        assert_eq!(host.get("gistMateToken").await.unwrap(), None);
        host.store("gistMateToken", "ghp_abc").await.unwrap();
        assert_eq!(
            host.get("gistMateToken").await.unwrap().as_deref(),
            Some("ghp_abc")
        );
    }

    #[wasm_bindgen_test]
    fn test_active_document() {
        let host = host("{ activeDocument() { return { fileName: '/a.rs', text: 'x' }; } }");
        let doc = host.active_document().unwrap().unwrap();
        assert_eq!(doc.file_name.as_deref(), Some("/a.rs"));
        assert_eq!(doc.selected_text, None);
    }

    #[wasm_bindgen_test]
    fn test_no_active_document() {
        let host = host("{ activeDocument() { return undefined; } }");
        assert_eq!(host.active_document().unwrap(), None);
    }

    #[wasm_bindgen_test]
    async fn test_input_box_runs_validator() {
        let host = host(
            "{ showInputBox(o) { return Promise.resolve(o.validateInput('') || 'ok'); } }",
        );
        let options = InputBoxOptions {
            validate: Some(Rc::new(|v: &str| {
                if v.is_empty() {
                    Err("required".to_string())
                } else {
                    Ok(())
                }
            })),
            ..InputBoxOptions::default()
        };
        let value = host.show_input_box(options).await.unwrap();
        assert_eq!(value.as_deref(), Some("required"));
    }

    #[wasm_bindgen_test]
    async fn test_input_box_passes_focus_option() {
        let host =
            host("{ showInputBox(o) { return Promise.resolve(String(o.ignoreFocusOut)); } }");
        let value = host
            .show_input_box(InputBoxOptions::default())
            .await
            .unwrap();
        assert_eq!(value.as_deref(), Some("false"));

        let options = InputBoxOptions {
            ignore_focus_out: true,
            ..InputBoxOptions::default()
        };
        let value = host.show_input_box(options).await.unwrap();
        assert_eq!(value.as_deref(), Some("true"));
    }

    #[wasm_bindgen_test]
    async fn test_quick_pick_returns_item_value() {
        let host = host("{ showQuickPick(items) { return Promise.resolve(items[1]); } }");
        let items = vec![
            QuickPickItem {
                label: "Public".into(),
                value: "Y".into(),
                description: String::new(),
            },
            QuickPickItem {
                label: "Secret".into(),
                value: "N".into(),
                description: String::new(),
            },
        ];
        let picked = host
            .show_quick_pick(&items, &QuickPickOptions::default())
            .await
            .unwrap();
        assert_eq!(picked.as_deref(), Some("N"));
    }
}
