/// Shared adapters - implementations that build for both native and WASM.

pub mod clock;
pub mod github_gists;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use github_gists::GithubGistClient;
pub use memory::{MemoryChannel, MemoryChannelProvider, RecordingConsole};
