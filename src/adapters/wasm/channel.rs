use wasm_bindgen::JsValue;

use super::handles::JsHandle;
use super::interop::{call_method_sync, string_property};
use crate::domain::commands::HostError;
use crate::ports::{ChannelProvider, OutputChannel};

/// An output channel object created by the host (`appendLine`, `show`,
/// `dispose`). Host failures are swallowed so logging never throws.
pub struct JsOutputChannel {
    channel: JsHandle,
}

impl JsOutputChannel {
    pub fn new(channel: JsValue) -> Self {
        Self {
            channel: JsHandle::new(channel),
        }
    }

    fn call(&self, method: &str, args: &[JsValue]) {
        if let Some(channel) = self.channel.get() {
            let _ = call_method_sync(&channel, method, args);
        }
    }
}

impl OutputChannel for JsOutputChannel {
    fn append_line(&self, value: &str) {
        self.call("appendLine", &[JsValue::from_str(value)]);
    }

    fn show(&self, preserve_focus: Option<bool>) {
        let args = match preserve_focus {
            Some(flag) => vec![JsValue::from_bool(flag)],
            None => Vec::new(),
        };
        self.call("show", &args);
    }

    fn dispose(&self) {
        self.call("dispose", &[]);
    }
}

/// Channel provider over a JS factory method.
pub struct JsChannelProvider {
    name: String,
    target: JsHandle,
    factory: &'static str,
}

impl JsChannelProvider {
    /// Provider over the host's `createOutputChannel(name)`.
    pub fn new(name: impl Into<String>, host: JsValue) -> Self {
        Self {
            name: name.into(),
            target: JsHandle::new(host),
            factory: "createOutputChannel",
        }
    }

    /// Provider over a `{ name, createChannel(name) }` object.
    pub fn from_provider(provider: JsValue) -> Result<Self, HostError> {
        let name = string_property(&provider, "name")?
            .ok_or_else(|| HostError::invalid_response("channel provider needs a `name`"))?;
        Ok(Self {
            name,
            target: JsHandle::new(provider),
            factory: "createChannel",
        })
    }
}

impl ChannelProvider for JsChannelProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_channel(&self, name: &str) -> Box<dyn OutputChannel> {
        let channel = self
            .target
            .get()
            .and_then(|target| {
                call_method_sync(&target, self.factory, &[JsValue::from_str(name)]).ok()
            })
            .unwrap_or(JsValue::UNDEFINED);
        Box::new(JsOutputChannel::new(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_lines_reach_the_host_channel() {
        let host = js_sys::eval(
            "({ lines: [], createOutputChannel(name) { const h = this; \
               return { appendLine(v) { h.lines.push(name + ':' + v); } }; } })",
        )
        .unwrap();
        let provider = JsChannelProvider::new("GistMate", host.clone());
        let channel = provider.create_channel("GistMate");
        channel.append_line("hello");
        channel.show(Some(true));
        channel.dispose();

        let lines = js_sys::Array::from(&js_sys::Reflect::get(&host, &"lines".into()).unwrap());
        assert_eq!(lines.get(0).as_string().as_deref(), Some("GistMate:hello"));
    }

    #[wasm_bindgen_test]
    fn test_from_provider_object() {
        let provider = js_sys::eval(
            "({ name: 'GistMate', created: [], createChannel(n) { this.created.push(n); return {}; } })",
        )
        .unwrap();
        let provider = JsChannelProvider::from_provider(provider).unwrap();
        assert_eq!(provider.name(), "GistMate");
        provider.create_channel("GistMate").append_line("ignored without appendLine");
    }

    #[wasm_bindgen_test]
    fn test_from_provider_requires_name() {
        let provider = js_sys::eval("({ createChannel() { return {}; } })").unwrap();
        assert!(JsChannelProvider::from_provider(provider).is_err());
    }
}
