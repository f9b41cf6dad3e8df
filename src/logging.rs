//! Minimal stderr logger for the command-line driver
//!
//! The library only emits records through the `log` facade; binaries decide whether
//! anything is printed.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level
pub const LOG_ENV: &str = "HANGMAN_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `warn`
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger with the level taken from `HANGMAN_LOG`
///
/// Calling this more than once keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
