use crate::ports::{ConsolePort, ConsoleRecord};

/// Native console mirror writing to standard error.
///
/// The parts of a record are printed space-separated, the way a JS console
/// prints discrete arguments.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    pub fn render(record: &ConsoleRecord) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4 + record.params.len());
        if let Some(prefix) = &record.prefix {
            parts.push(prefix);
        }
        parts.push(&record.level);
        parts.push(&record.timestamp);
        parts.push(&record.message);
        parts.extend(record.params.iter().map(|param| param.to_loggable()));
        parts.join(" ")
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for Console {
    fn write(&self, record: &ConsoleRecord) {
        eprintln!("{}", Self::render(record));
    }
}
