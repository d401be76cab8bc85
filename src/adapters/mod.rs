/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;
pub mod log_bridge;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::Console;
#[cfg(not(target_arch = "wasm32"))]
pub use native::Console;

pub use global_logger::logger;
pub use log_bridge::install_log_bridge;
