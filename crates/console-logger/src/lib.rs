//! Console Logger
//!
//! A `log` backend for browser apps. Records go to the devtools console
//! at the matching console level, or to stderr when not running on wasm32.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger installed by [`init`]
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// One output line: `[LEVEL] target: message`
pub fn format_line(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_console(record.level(), &format_line(record));
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if any logger (this one included) is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let line = js_sys::JsString::from(line).into();
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("hello"))
                .build(),
        );
        assert_eq!(line, "[INFO] test: hello");
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let info = Metadata::builder().level(Level::Info).target("test").build();
        let warn = Metadata::builder().level(Level::Warn).target("test").build();
        let error = Metadata::builder().level(Level::Error).target("test").build();

        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&warn));
        assert!(logger.enabled(&error));
    }
}
