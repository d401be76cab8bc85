/// Native adapters - implementations for native Rust (non-WASM).

pub mod channel;
pub mod console;
pub mod headless;
pub mod secrets;

pub use channel::{ChannelTarget, WriterChannel, WriterChannelProvider};
pub use console::Console;
pub use headless::{init_logging, init_logging_from_env};
pub use secrets::MemorySecretStore;
