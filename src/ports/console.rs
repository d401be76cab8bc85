use crate::domain::logging::LogParam;

/// A log call as handed to the debug console mirror. Unlike the output
/// channel, the console receives each part separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleRecord {
    /// `[<provider name>]`, or `None` when no provider is bound yet.
    pub prefix: Option<String>,
    /// `[<LEVEL>]` in upper case.
    pub level: String,
    pub timestamp: String,
    pub message: String,
    pub params: Vec<LogParam>,
}

/// Console port - the developer-facing console used for debug mirroring.
///
/// - WASM: the host's `console.log`
/// - Native: standard error
pub trait ConsolePort: Send + Sync {
    fn write(&self, record: &ConsoleRecord);
}
