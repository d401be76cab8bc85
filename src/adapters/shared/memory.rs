//! In-memory channel and console adapters.
//!
//! Used by headless hosts and by tests that need to inspect exactly what the
//! logger wrote. Clones share the same buffers.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::ports::{ChannelProvider, ConsolePort, ConsoleRecord, OutputChannel};

#[derive(Default)]
struct ChannelLog {
    created: Vec<String>,
    lines: Vec<String>,
    shown: Vec<Option<bool>>,
    disposed: usize,
}

/// Output channel appending to a shared buffer.
pub struct MemoryChannel {
    log: Arc<Mutex<ChannelLog>>,
}

impl OutputChannel for MemoryChannel {
    fn append_line(&self, value: &str) {
        self.log.lock().lines.push(value.to_string());
    }

    fn show(&self, preserve_focus: Option<bool>) {
        self.log.lock().shown.push(preserve_focus);
    }

    fn dispose(&self) {
        self.log.lock().disposed += 1;
    }
}

/// Provider of [`MemoryChannel`]s that counts creations and disposals.
#[derive(Clone)]
pub struct MemoryChannelProvider {
    name: String,
    log: Arc<Mutex<ChannelLog>>,
}

impl MemoryChannelProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log: Arc::new(Mutex::new(ChannelLog::default())),
        }
    }

    /// Every line written to any channel from this provider, in order.
    pub fn lines(&self) -> Vec<String> {
        self.log.lock().lines.clone()
    }

    pub fn created(&self) -> usize {
        self.log.lock().created.len()
    }

    pub fn created_names(&self) -> Vec<String> {
        self.log.lock().created.clone()
    }

    pub fn disposed(&self) -> usize {
        self.log.lock().disposed
    }

    pub fn shown(&self) -> Vec<Option<bool>> {
        self.log.lock().shown.clone()
    }
}

impl ChannelProvider for MemoryChannelProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_channel(&self, name: &str) -> Box<dyn OutputChannel> {
        self.log.lock().created.push(name.to_string());
        Box::new(MemoryChannel {
            log: Arc::clone(&self.log),
        })
    }
}

/// Console that keeps every mirrored record.
#[derive(Clone, Default)]
pub struct RecordingConsole {
    records: Arc<Mutex<Vec<ConsoleRecord>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ConsoleRecord> {
        self.records.lock().clone()
    }
}

impl ConsolePort for RecordingConsole {
    fn write(&self, record: &ConsoleRecord) {
        self.records.lock().push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_share_the_provider_buffer() {
        let provider = MemoryChannelProvider::new("mem");
        let first = provider.create_channel("mem");
        let second = provider.create_channel("mem");
        first.append_line("one");
        second.append_line("two");

        assert_eq!(provider.lines(), vec!["one".to_string(), "two".to_string()]);
        assert_eq!(provider.created(), 2);
    }

    #[test]
    fn test_dispose_is_counted() {
        let provider = MemoryChannelProvider::new("mem");
        provider.create_channel("mem").dispose();
        assert_eq!(provider.disposed(), 1);
    }

    #[test]
    fn test_recording_console_clones_share_records() {
        let console = RecordingConsole::new();
        let clone = console.clone();
        clone.write(&ConsoleRecord {
            prefix: None,
            level: "[INFO]".to_string(),
            timestamp: "[t]".to_string(),
            message: "m".to_string(),
            params: Vec::new(),
        });
        assert_eq!(console.records().len(), 1);
    }
}
