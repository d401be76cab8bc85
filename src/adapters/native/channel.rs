use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::ports::{ChannelProvider, OutputChannel};

/// Where a [`WriterChannelProvider`] sends its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelTarget {
    Stdout,
    Stderr,
    /// Appends to a file, falling back to standard error if it cannot be
    /// opened.
    File(PathBuf),
}

/// Output channel over any writer; each line is flushed as it is written.
pub struct WriterChannel {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterChannel {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl OutputChannel for WriterChannel {
    fn append_line(&self, value: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{value}");
        let _ = writer.flush();
    }

    fn dispose(&self) {
        let _ = self.writer.lock().flush();
    }
}

/// Native channel provider for terminals and log files.
#[derive(Debug, Clone)]
pub struct WriterChannelProvider {
    name: String,
    target: ChannelTarget,
}

impl WriterChannelProvider {
    pub fn new(name: impl Into<String>, target: ChannelTarget) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    pub fn stderr(name: impl Into<String>) -> Self {
        Self::new(name, ChannelTarget::Stderr)
    }

    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(name, ChannelTarget::File(path.into()))
    }

    fn open(&self) -> Box<dyn Write + Send> {
        match &self.target {
            ChannelTarget::Stdout => Box::new(io::stdout()),
            ChannelTarget::Stderr => Box::new(io::stderr()),
            ChannelTarget::File(path) => {
                match OpenOptions::new().create(true).append(true).open(path) {
                    Ok(file) => Box::new(file),
                    Err(err) => {
                        eprintln!("[{}] cannot open {}: {err}", self.name, path.display());
                        Box::new(io::stderr())
                    }
                }
            }
        }
    }
}

impl ChannelProvider for WriterChannelProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_channel(&self, _name: &str) -> Box<dyn OutputChannel> {
        Box::new(WriterChannel::new(self.open()))
    }
}
