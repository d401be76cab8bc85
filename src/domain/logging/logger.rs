use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use super::format::{format_line, format_timestamp};
use super::level::LogLevel;
use super::param::{Cause, LogParam};
use crate::ports::{ChannelProvider, ClockPort, ConsolePort, ConsoleRecord, OutputChannel};

/// Leveled logger writing to a host output channel and, in debug mode, to
/// the developer console.
///
/// The output channel exists exactly while the level is not `off` and a
/// provider is bound. Console mirroring ignores the level entirely.
///
/// Host code (channel, provider, console) never runs while `state` is locked,
/// so a channel may log back into the same logger. Channel I/O and channel
/// lifecycle are serialized by `sink`, which the current thread may re-enter:
/// once `set_log_level(Off)` returns, no other thread appends to the old
/// channel.
pub struct Logger {
    state: Mutex<LoggerState>,
    sink: ReentrantMutex<()>,
    clock: Box<dyn ClockPort>,
    console: Box<dyn ConsolePort>,
}

#[derive(Default)]
struct LoggerState {
    level: LogLevel,
    debugging: bool,
    provider: Option<Arc<dyn ChannelProvider>>,
    channel: Option<Arc<dyn OutputChannel>>,
}

/// Channel work decided under the state lock, carried out after it.
enum SinkChange {
    None,
    Dispose(Arc<dyn OutputChannel>),
    Create(Arc<dyn ChannelProvider>),
}

impl LoggerState {
    fn apply_level(&mut self, level: LogLevel) -> SinkChange {
        self.level = level;

        if level.is_off() {
            return match self.channel.take() {
                Some(channel) => SinkChange::Dispose(channel),
                None => SinkChange::None,
            };
        }
        match (&self.channel, &self.provider) {
            (None, Some(provider)) => SinkChange::Create(Arc::clone(provider)),
            _ => SinkChange::None,
        }
    }
}

impl Logger {
    /// Creates an unconfigured logger: level `off`, no provider, no channel.
    pub fn new(clock: Box<dyn ClockPort>, console: Box<dyn ConsolePort>) -> Self {
        Self {
            state: Mutex::new(LoggerState::default()),
            sink: ReentrantMutex::new(()),
            clock,
            console,
        }
    }

    /// Binds `provider` and sets the level and debug flag. `None` keeps the
    /// current value.
    ///
    /// An existing channel is kept when the level stays active, so repeated
    /// identical calls neither create nor dispose anything.
    pub fn configure(
        &self,
        provider: Arc<dyn ChannelProvider>,
        level: impl Into<Option<LogLevel>>,
        debugging: impl Into<Option<bool>>,
    ) {
        let _sink = self.sink.lock();
        let change = {
            let mut state = self.state.lock();
            state.provider = Some(provider);
            if let Some(debugging) = debugging.into() {
                state.debugging = debugging;
            }
            let level = level.into().unwrap_or(state.level);
            state.apply_level(level)
        };
        self.apply_sink_change(change);
    }

    fn apply_sink_change(&self, change: SinkChange) {
        match change {
            SinkChange::None => {}
            SinkChange::Dispose(channel) => channel.dispose(),
            SinkChange::Create(provider) => {
                let channel: Arc<dyn OutputChannel> =
                    Arc::from(provider.create_channel(provider.name()));
                // The provider may have logged or reconfigured us meanwhile.
                let surplus = {
                    let mut state = self.state.lock();
                    if state.level.is_off() || state.channel.is_some() {
                        Some(channel)
                    } else {
                        state.channel = Some(channel);
                        None
                    }
                };
                if let Some(channel) = surplus {
                    channel.dispose();
                }
            }
        }
    }

    pub fn log_level(&self) -> LogLevel {
        self.state.lock().level
    }

    /// Setting `off` disposes the channel; any other level creates it through
    /// the bound provider if it does not exist yet.
    pub fn set_log_level(&self, level: LogLevel) {
        let _sink = self.sink.lock();
        let change = self.state.lock().apply_level(level);
        self.apply_sink_change(change);
    }

    pub fn is_debugging(&self) -> bool {
        self.state.lock().debugging
    }

    pub fn has_output_channel(&self) -> bool {
        self.state.lock().channel.is_some()
    }

    /// Name of the bound provider, if any.
    pub fn name(&self) -> Option<String> {
        self.state
            .lock()
            .provider
            .as_ref()
            .map(|provider| provider.name().to_string())
    }

    pub fn show_output_channel(&self, preserve_focus: Option<bool>) {
        let _sink = self.sink.lock();
        let channel = self.state.lock().channel.clone();
        if let Some(channel) = channel {
            channel.show(preserve_focus);
        }
    }

    pub fn debug(&self, message: &str, params: &[LogParam]) {
        self.write(LogLevel::Debug, message, params);
    }

    /// Info-level entry.
    pub fn log(&self, message: &str, params: &[LogParam]) {
        self.write(LogLevel::Info, message, params);
    }

    pub fn info(&self, message: &str, params: &[LogParam]) {
        self.log(message, params);
    }

    pub fn warn(&self, message: &str, params: &[LogParam]) {
        self.write(LogLevel::Warn, message, params);
    }

    /// Error-level entry.
    ///
    /// An error `cause` is appended to the message as `"<message>: <error>"`
    /// and also becomes the first parameter. Any other cause is just the first
    /// parameter. `params` follow in both cases.
    pub fn error(&self, message: &str, cause: Option<Cause>, params: &[LogParam]) {
        let mut all = Vec::with_capacity(params.len() + 1);
        let message = match cause {
            Some(Cause::Error(text)) => {
                let message = format!("{message}: {text}");
                all.push(LogParam::Error(text));
                message
            }
            Some(Cause::Param(param)) => {
                all.push(param);
                message.to_string()
            }
            None => message.to_string(),
        };
        all.extend_from_slice(params);

        self.write(LogLevel::Error, &message, &all);
    }

    fn write(&self, severity: LogLevel, message: &str, params: &[LogParam]) {
        let sink = self.sink.lock();
        let (channel, debugging, prefix) = {
            let state = self.state.lock();
            let channel = if state.level.allows(severity) {
                state.channel.clone()
            } else {
                None
            };
            if channel.is_none() && !state.debugging {
                return;
            }
            let prefix = state
                .provider
                .as_ref()
                .filter(|_| state.debugging)
                .map(|provider| format!("[{}]", provider.name()));
            (channel, state.debugging, prefix)
        };

        let timestamp = format_timestamp(self.clock.now());
        if let Some(channel) = channel {
            channel.append_line(&format_line(&timestamp, severity, message, params));
        }
        if !debugging {
            return;
        }
        drop(sink);

        self.console.write(&ConsoleRecord {
            prefix,
            level: format!("[{}]", severity.as_str().to_uppercase()),
            timestamp,
            message: message.to_string(),
            params: params.to_vec(),
        });
    }
}
