//! Rolling Logger
//!
//! Keeps the most recent log lines in a circular buffer so the UI can show
//! them. Captures both the `log` facade and `tracing` events; every line is
//! also mirrored to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter};
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

static BUFFER: OnceLock<Arc<RollingBuffer>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error("failed to install log facade: {0}")]
    SetLogger(#[from] log::SetLoggerError),
    #[error("failed to install tracing subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// One captured record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub at: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.at.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity ring of log lines; the oldest line is dropped first
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn push(&self, line: LogLine) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Up to `n` most recent lines, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => {
                let skip = lines.len().saturating_sub(n);
                lines.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, level: Level, target: &str, message: String) {
        let line = LogLine {
            at: Local::now(),
            level,
            target: target.to_string(),
            message,
        };
        mirror(&line);
        self.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn mirror(line: &LogLine) {
    let text = line.to_string();
    match line.level {
        Level::Error => web_sys::console::error_1(&text.into()),
        Level::Warn => web_sys::console::warn_1(&text.into()),
        _ => web_sys::console::log_1(&text.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror(line: &LogLine) {
    eprintln!("{}", line);
}

/// `log` facade sink
struct RollingLogger {
    buffer: Arc<RollingBuffer>,
    level: LevelFilter,
}

impl log::Log for RollingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.buffer
                .record(record.level(), record.target(), record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// `tracing` sink writing into the same buffer
pub struct BufferLayer {
    buffer: Arc<RollingBuffer>,
    level: LevelFilter,
}

impl BufferLayer {
    pub fn new(buffer: Arc<RollingBuffer>, level: LevelFilter) -> Self {
        Self { buffer, level }
    }
}

impl<S: tracing::Subscriber> Layer<S> for BufferLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = to_log_level(*metadata.level());
        if level > self.level {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.buffer.record(level, metadata.target(), visitor.finish());
    }
}

fn to_log_level(level: tracing::Level) -> Level {
    match level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        tracing::Level::TRACE => Level::Trace,
    }
}

/// Collects the message plus `key=value` for every other field
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// Install the rolling logger for both `log` and `tracing`.
///
/// Can only succeed once per process.
pub fn init_logger(app_name: &str, capacity: usize, level: LevelFilter) -> Result<(), LoggerError> {
    if BUFFER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let buffer = Arc::new(RollingBuffer::new(capacity));

    log::set_boxed_logger(Box::new(RollingLogger {
        buffer: buffer.clone(),
        level,
    }))?;
    log::set_max_level(level);

    let subscriber = tracing_subscriber::registry().with(BufferLayer::new(buffer.clone(), level));
    tracing::subscriber::set_global_default(subscriber)?;

    BUFFER.set(buffer).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::info!(target: "rolling_logger", "{} logging started (keeping {} lines)", app_name, capacity);
    Ok(())
}

/// Up to `n` most recent lines from the global buffer, oldest first
pub fn recent(n: usize) -> Vec<LogLine> {
    BUFFER.get().map(|buffer| buffer.recent(n)).unwrap_or_default()
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    write(Level::Info, message)
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    write(Level::Warn, message)
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    write(Level::Error, message)
}

fn write(level: Level, message: &str) -> Result<(), LoggerError> {
    if BUFFER.get().is_none() {
        return Err(LoggerError::NotInitialized);
    }
    log::log!(target: "app", level, "{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine {
            at: Local::now(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_helpers_report_missing_logger() {
        // No test installs the global logger
        assert!(matches!(warn("config fallback"), Err(LoggerError::NotInitialized)));
        assert!(matches!(info("hello"), Err(LoggerError::NotInitialized)));
        assert!(recent(5).is_empty());
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(line(&format!("line {}", i)));
        }
        assert_eq!(buffer.len(), 3);
        let messages: Vec<_> = buffer.recent(10).into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_recent_returns_newest_in_order() {
        let buffer = RollingBuffer::new(10);
        for i in 0..4 {
            buffer.push(line(&format!("line {}", i)));
        }
        let messages: Vec<_> = buffer.recent(2).into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = RollingBuffer::new(0);
        buffer.push(line("a"));
        buffer.push(line("b"));
        assert_eq!(buffer.recent(5).len(), 1);
    }

    #[test]
    fn test_log_facade_respects_level() {
        let buffer = Arc::new(RollingBuffer::new(10));
        let logger = RollingLogger { buffer: buffer.clone(), level: LevelFilter::Info };
        log::Log::log(
            &logger,
            &log::Record::builder().level(Level::Info).target("ui").args(format_args!("shown")).build(),
        );
        log::Log::log(
            &logger,
            &log::Record::builder().level(Level::Debug).target("ui").args(format_args!("hidden")).build(),
        );
        let lines = buffer.recent(10);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "shown");
        assert_eq!(lines[0].target, "ui");
    }

    #[test]
    fn test_tracing_layer_captures_fields() {
        let buffer = Arc::new(RollingBuffer::new(10));
        let subscriber = tracing_subscriber::registry().with(BufferLayer::new(buffer.clone(), LevelFilter::Debug));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(screen = "s1", index = 2, "screen deleted");
            tracing::trace!("too verbose");
        });
        let lines = buffer.recent(10);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Debug);
        assert_eq!(lines[0].message, "screen deleted screen=s1 index=2");
    }

    #[test]
    fn test_line_display() {
        let text = line("hello").to_string();
        assert!(text.starts_with('['));
        assert!(text.contains("INFO"));
        assert!(text.ends_with("test: hello"));
    }
}
