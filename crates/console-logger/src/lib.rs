//! Console Logger
//!
//! `log` backend for the browser. Records are written to the devtools
//! console (stderr on native targets) and kept in a circular buffer so the
//! most recent lines can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept by the global logger.
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: Mutex<LevelFilter>,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level: Mutex::new(level),
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Change the threshold at runtime (e.g. once site config is known).
    pub fn set_level(&self, level: LevelFilter) {
        if let Ok(mut current) = self.level.lock() {
            *current = level;
        }
        log::set_max_level(level);
    }

    pub fn level(&self) -> LevelFilter {
        self.level.lock().map(|l| *l).unwrap_or(LevelFilter::Off)
    }

    /// Most recent formatted records, oldest first.
    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// `[LEVEL target] message`
pub fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    logger.set_level(level);
    Ok(logger)
}

/// The global logger, if [`init`] has run.
pub fn global() -> Option<&'static ConsoleLogger> {
    LOGGER.get()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("bazar_ui::cart")
                .build(),
        );
    }

    #[test]
    fn test_format_record() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 4);
        log_at(&logger, Level::Info, "Category clicked: Electronics");
        assert_eq!(logger.recent(), vec!["[INFO bazar_ui::cart] Category clicked: Electronics"]);
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        log_at(&logger, Level::Info, "one");
        log_at(&logger, Level::Info, "two");
        log_at(&logger, Level::Info, "three");

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("two"));
        assert!(recent[1].ends_with("three"));
    }

    #[test]
    fn test_level_threshold() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 8);
        log_at(&logger, Level::Info, "hidden");
        log_at(&logger, Level::Error, "shown");
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_debug_interop_failures_kept_after_level_change() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 8);
        log_at(&logger, Level::Debug, "failed to move product 3: JsValue(HierarchyRequestError)");
        assert!(logger.recent().is_empty());

        logger.set_level(LevelFilter::Debug);
        log_at(&logger, Level::Debug, "failed to toggle list view: JsValue(InvalidCharacterError)");
        assert_eq!(
            logger.recent(),
            vec!["[DEBUG bazar_ui::cart] failed to toggle list view: JsValue(InvalidCharacterError)"]
        );
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 0);
        log_at(&logger, Level::Error, "gone");
        assert!(logger.recent().is_empty());
    }
}
