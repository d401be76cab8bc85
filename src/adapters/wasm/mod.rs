/// WASM adapters - implementations over the JS host object.

pub mod channel;
pub mod console;
pub mod error_conversions;
pub mod handles;
pub mod host;
pub mod interop;

pub use channel::{JsChannelProvider, JsOutputChannel};
pub use console::Console;
pub use host::JsHost;
