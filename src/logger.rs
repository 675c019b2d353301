use std::io::stderr;
use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;
use log::SetLoggerError;

/// Writes `<time> <program> <LEVEL> <message>` lines to stderr.
pub(crate) struct Logger {
    program: &'static str,
}

impl Logger {
    pub(crate) fn init(program: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = LOGGER.get_or_init(move || Logger { program });
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = stderr().lock();
        // nowhere left to report a failed write
        let _ = writeln!(
            stderr,
            "{} {} {}: {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.program,
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();
