#![cfg(not(target_arch = "wasm32"))]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use gistmate::adapters::shared::{FixedClock, MemoryChannelProvider, RecordingConsole};
use gistmate::domain::logging::{Cause, LogLevel, LogParam, Logger};
use gistmate::log_params;
use gistmate::ports::{ChannelProvider, OutputChannel};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::Serialize;

const STAMP: &str = "[2024-03-01 09:30:15.250]";

fn logger() -> (Logger, Arc<MemoryChannelProvider>, RecordingConsole) {
    let console = RecordingConsole::new();
    let clock = FixedClock::new(
        chrono::DateTime::parse_from_rfc3339("2024-03-01T09:30:15.250Z")
            .unwrap()
            .with_timezone(&chrono::Utc),
    );
    let logger = Logger::new(Box::new(clock), Box::new(console.clone()));
    (logger, Arc::new(MemoryChannelProvider::new("GistMate")), console)
}

fn call(logger: &Logger, severity: LogLevel) {
    match severity {
        LogLevel::Debug => logger.debug("entry", &[]),
        LogLevel::Info => logger.log("entry", &[]),
        LogLevel::Warn => logger.warn("entry", &[]),
        LogLevel::Error => logger.error("entry", None, &[]),
        LogLevel::Off => {}
    }
}

#[test]
fn test_sink_receives_entry_iff_rank_allows() {
    let severities = [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug];

    for configured in LogLevel::ALL {
        for severity in severities {
            let (logger, provider, _) = logger();
            logger.configure(provider.clone(), configured, false);
            call(&logger, severity);

            let expected = configured != LogLevel::Off && severity.rank() <= configured.rank();
            assert_eq!(
                provider.lines().len(),
                usize::from(expected),
                "configured {configured:?}, called {severity:?}"
            );
        }
    }
}

#[test]
fn test_off_always_disposes_and_active_creates_exactly_one() {
    let (logger, provider, _) = logger();
    logger.configure(provider.clone(), LogLevel::Debug, false);
    logger.set_log_level(LogLevel::Off);
    assert!(!logger.has_output_channel());
    assert_eq!(provider.disposed(), 1);

    logger.set_log_level(LogLevel::Error);
    assert!(logger.has_output_channel());
    assert_eq!(provider.created(), 2);
}

#[test]
fn test_configure_is_idempotent() {
    let (logger, provider, _) = logger();
    for _ in 0..3 {
        logger.configure(provider.clone(), LogLevel::Info, true);
    }
    assert_eq!(provider.created(), 1);
    assert_eq!(provider.disposed(), 0);
}

#[derive(Debug)]
struct Boom;

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("boom")
    }
}

impl std::error::Error for Boom {}

#[test]
fn test_error_cause_extends_message() {
    let (logger, provider, _) = logger();
    logger.configure(provider.clone(), LogLevel::Error, false);
    logger.error("X failed", Some(Cause::from(&Boom)), &[]);

    assert_eq!(
        provider.lines(),
        vec![format!("{STAMP} [error] X failed: boom \u{2014} boom")]
    );
}

#[derive(Debug, Serialize)]
struct Code {
    code: u32,
}

#[test]
fn test_non_error_cause_is_first_param() {
    let (logger, provider, _) = logger();
    logger.configure(provider.clone(), LogLevel::Error, false);
    logger.error(
        "X failed",
        Some(Cause::from(LogParam::structured(&Code { code: 42 }))),
        &[LogParam::from("extra")],
    );

    assert_eq!(
        provider.lines(),
        vec![format!(
            "{STAMP} [error] X failed \u{2014} {{\n  \"code\": 42\n}}, extra"
        )]
    );
}

#[test]
fn test_params_rendering() {
    let (logger, provider, _) = logger();
    logger.configure(provider.clone(), LogLevel::Info, false);
    logger.log("no params", &[]);
    logger.log("some params", &log_params!["a", 1, true]);

    assert_eq!(
        provider.lines(),
        vec![
            format!("{STAMP} [info] no params"),
            format!("{STAMP} [info] some params \u{2014} a, 1, true"),
        ]
    );
}

#[test]
fn test_unserializable_param_degrades() {
    struct Cyclic;

    impl Serialize for Cyclic {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cycle"))
        }
    }

    impl std::fmt::Debug for Cyclic {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("Cyclic { .. }")
        }
    }

    let (logger, provider, _) = logger();
    logger.configure(provider.clone(), LogLevel::Debug, false);
    logger.debug("cyclic", &[LogParam::structured(&Cyclic)]);

    assert_eq!(
        provider.lines(),
        vec![format!("{STAMP} [debug] cyclic \u{2014} Cyclic {{ .. }}")]
    );
}

#[test]
fn test_mirror_bypasses_off_level() {
    let (logger, provider, console) = logger();
    logger.configure(provider.clone(), LogLevel::Off, true);
    logger.debug("mirrored only", &[LogParam::from(7)]);

    assert_eq!(provider.created(), 0);
    assert!(provider.lines().is_empty());

    let records = console.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].prefix.as_deref(), Some("[GistMate]"));
    assert_eq!(records[0].level, "[DEBUG]");
    assert_eq!(records[0].timestamp, STAMP);
    assert_eq!(records[0].message, "mirrored only");
    assert_eq!(records[0].params, vec![LogParam::from(7)]);
}

fn leaked(logger: Logger) -> &'static Logger {
    Box::leak(Box::new(logger))
}

/// Runs `scenario` on a worker thread and fails if it does not finish.
fn within_deadline(scenario: impl FnOnce() + Send + 'static) {
    let (done, finished) = mpsc::channel();
    thread::spawn(move || {
        scenario();
        let _ = done.send(());
    });
    finished
        .recv_timeout(Duration::from_secs(10))
        .expect("logger calls did not finish, lock held across host code");
}

/// Channel that logs back into the logger it belongs to.
struct EchoChannel {
    logger: &'static Logger,
    lines: Arc<Mutex<Vec<String>>>,
}

impl OutputChannel for EchoChannel {
    fn append_line(&self, value: &str) {
        self.lines.lock().push(value.to_string());
        if !value.ends_with("echo") {
            self.logger.debug("echo", &[]);
        }
    }

    fn show(&self, _preserve_focus: Option<bool>) {
        self.logger.log("shown", &[]);
    }

    fn dispose(&self) {
        self.logger.warn("disposed", &[]);
    }
}

struct EchoProvider {
    logger: Arc<OnceCell<&'static Logger>>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl ChannelProvider for EchoProvider {
    fn name(&self) -> &str {
        "Echo"
    }

    fn create_channel(&self, _name: &str) -> Box<dyn OutputChannel> {
        let logger = *self.logger.get().expect("logger bound before configure");
        logger.info("creating channel", &[]);
        Box::new(EchoChannel {
            logger,
            lines: Arc::clone(&self.lines),
        })
    }
}

#[test]
fn test_channel_may_log_back_into_its_logger() {
    let console = RecordingConsole::new();
    let logger = leaked(Logger::new(
        Box::new(FixedClock::at_millis(0)),
        Box::new(console.clone()),
    ));
    let lines = Arc::new(Mutex::new(Vec::new()));
    let cell = Arc::new(OnceCell::new());
    let _ = cell.set(logger);
    let provider = Arc::new(EchoProvider {
        logger: cell,
        lines: Arc::clone(&lines),
    });

    within_deadline(move || {
        logger.configure(provider, LogLevel::Debug, true);
        logger.log("hello", &[]);
        logger.show_output_channel(None);
        logger.set_log_level(LogLevel::Off);
    });

    let lines = lines.lock().clone();
    assert_eq!(
        lines,
        vec![
            "[1970-01-01 00:00:00.000] [info] hello".to_string(),
            "[1970-01-01 00:00:00.000] [debug] echo".to_string(),
            "[1970-01-01 00:00:00.000] [info] shown".to_string(),
            "[1970-01-01 00:00:00.000] [debug] echo".to_string(),
        ]
    );
    let mirrored: Vec<String> = console.records().into_iter().map(|r| r.message).collect();
    assert!(mirrored.contains(&"creating channel".to_string()));
    assert!(mirrored.contains(&"disposed".to_string()));
}

/// Channel that records whether it was written after being disposed.
struct TrackedChannel {
    disposed: AtomicBool,
    stats: Arc<ChannelStats>,
}

#[derive(Default)]
struct ChannelStats {
    created: AtomicUsize,
    disposed: AtomicUsize,
    lines: AtomicUsize,
    late_lines: AtomicUsize,
}

impl OutputChannel for TrackedChannel {
    fn append_line(&self, _value: &str) {
        if self.disposed.load(Ordering::SeqCst) {
            self.stats.late_lines.fetch_add(1, Ordering::SeqCst);
        }
        self.stats.lines.fetch_add(1, Ordering::SeqCst);
    }

    fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
        self.stats.disposed.fetch_add(1, Ordering::SeqCst);
    }
}

struct TrackedProvider(Arc<ChannelStats>);

impl ChannelProvider for TrackedProvider {
    fn name(&self) -> &str {
        "Tracked"
    }

    fn create_channel(&self, _name: &str) -> Box<dyn OutputChannel> {
        self.0.created.fetch_add(1, Ordering::SeqCst);
        Box::new(TrackedChannel {
            disposed: AtomicBool::new(false),
            stats: Arc::clone(&self.0),
        })
    }
}

#[test]
fn test_reconfiguration_and_writes_do_not_interleave() {
    let logger = leaked(Logger::new(
        Box::new(FixedClock::at_millis(0)),
        Box::new(RecordingConsole::new()),
    ));
    let stats = Arc::new(ChannelStats::default());
    let provider: Arc<dyn ChannelProvider> = Arc::new(TrackedProvider(Arc::clone(&stats)));

    let worker_provider = Arc::clone(&provider);
    within_deadline(move || {
        let writers: Vec<_> = (0..4)
            .map(|n| {
                thread::spawn(move || {
                    for i in 0..500 {
                        logger.log("tick", &[LogParam::from(n), LogParam::from(i)]);
                    }
                })
            })
            .collect();
        let switcher = thread::spawn(move || {
            for i in 0..200 {
                if i % 2 == 0 {
                    logger.configure(Arc::clone(&worker_provider), LogLevel::Debug, false);
                } else {
                    logger.set_log_level(LogLevel::Off);
                }
            }
            logger.configure(worker_provider, LogLevel::Info, None);
        });
        for writer in writers {
            writer.join().expect("writer thread panicked");
        }
        switcher.join().expect("switcher thread panicked");
    });

    assert!(logger.has_output_channel());
    assert_eq!(
        stats.created.load(Ordering::SeqCst),
        stats.disposed.load(Ordering::SeqCst) + 1
    );
    assert_eq!(stats.late_lines.load(Ordering::SeqCst), 0);

    logger.set_log_level(LogLevel::Off);
    let written = stats.lines.load(Ordering::SeqCst);
    logger.error("after off", None, &[]);
    logger.debug("after off", &[]);

    assert_eq!(
        stats.created.load(Ordering::SeqCst),
        stats.disposed.load(Ordering::SeqCst)
    );
    assert_eq!(stats.lines.load(Ordering::SeqCst), written);
    assert_eq!(stats.late_lines.load(Ordering::SeqCst), 0);
}
