//! Rolling Logger
//!
//! `log` backend that keeps the most recent entries in a circular buffer and
//! writes every line to the browser console (stderr when not on wasm32).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Entries kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `[HH:MM:SS.mmm] LEVEL target: message`
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter) -> Self {
        Self::with_capacity(app_name, level, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&self.app_name, &entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(app_name: &str, entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&format!("{} {}", app_name, entry.format_line()));
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::log_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(app_name: &str, entry: &LogEntry) {
    eprintln!("{} {}", app_name, entry.format_line());
}

/// Install the global logger. Call once at startup.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Entries captured by the global logger, oldest first
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::entries).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("todo_core::view")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = RollingLogger::with_capacity("Test", LevelFilter::Debug, 2);

        record(&logger, Level::Info, "one");
        record(&logger, Level::Info, "two");
        record(&logger, Level::Error, "three");

        let messages: Vec<_> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_level_filter_applies() {
        let logger = RollingLogger::new("Test", LevelFilter::Warn);

        record(&logger, Level::Debug, "hidden");
        record(&logger, Level::Error, "Error fetching todos: boom");

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
    }

    #[test]
    fn test_format_line() {
        let logger = RollingLogger::new("Test", LevelFilter::Info);
        record(&logger, Level::Info, "Added todo #3");

        let line = logger.entries()[0].format_line();
        assert!(line.ends_with("INFO todo_core::view: Added todo #3"), "{}", line);
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_clear_empties_buffer() {
        let logger = RollingLogger::new("Test", LevelFilter::Info);
        record(&logger, Level::Info, "x");
        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
