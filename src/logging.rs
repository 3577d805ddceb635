#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Writes records to stderr so they never interleave with the rendered fields.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target().trim_start_matches("seabattle::");
        eprintln!("[{:<5} {}] {}", record.level(), target, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `SEABATTLE_LOG`, `info` when unset or invalid.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging at the level given by `SEABATTLE_LOG`.
pub fn init_logging() {
    init_logging_with(level_from_env());
}

/// Initialize logging at `level`. Only the first call installs the logger;
/// later calls just adjust the level.
pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
