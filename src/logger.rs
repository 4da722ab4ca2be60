// src/logger.rs
//
// Minimal stderr backend for the `log` facade, used by the CLI.
// Library code only ever talks to `log` macros.

use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{}", format_line(record));
    }

    fn flush(&self) {}
}

fn format_line(record: &Record) -> String {
    format!(
        "[{}] [{:>5}] {}: {}",
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Level from `-v` repetitions: 0 warn, 1 info, 2 debug, 3+ trace
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
