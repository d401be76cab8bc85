/// Ports module - the traits that separate the domain from the editor host
/// and the platform.
///
/// Logging ports (`ChannelProvider`, `OutputChannel`, `ConsolePort`,
/// `ClockPort`) must be `Send + Sync` because the logger is shared process
/// wide. Host ports are used from a single task and carry no such bound.

pub mod channel;
pub mod clock;
pub mod console;
pub mod editor;
pub mod gist_api;
pub mod prompt;
pub mod secrets;

pub use channel::{ChannelProvider, OutputChannel};
pub use clock::ClockPort;
pub use console::{ConsolePort, ConsoleRecord};
pub use editor::{ActiveDocument, EditorPort};
pub use gist_api::GistApiPort;
pub use prompt::{
    InputBoxOptions, InputValidator, MessageItem, PromptPort, QuickPickItem, QuickPickOptions,
};
pub use secrets::SecretStorePort;
