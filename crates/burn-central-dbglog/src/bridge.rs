//! Routes records from the `log` facade through [`vlog`].
//!
//! Errors and warnings go to stderr as `ERROR`. Everything else goes to stdout as
//! `INFO`.

use std::io::{self, Write};

use log::{LevelFilter, Metadata, Record};

use crate::{DebugLogError, ENABLED, Level, Stream, config::config, vlog};

/// File name used for records that carry no location.
pub const UNKNOWN_FILE: &str = "<unknown>";

static LOGGER: DebugLogger = DebugLogger;

pub struct DebugLogger;

impl log::Log for DebugLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        ENABLED && config().enabled
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let (stream, file_name, line) = destination(record);
        vlog(stream, file_name, line, *record.args());
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

fn destination<'a>(record: &Record<'a>) -> (Stream, &'a str, u32) {
    let stream = Stream::from(Level::from(record.level()));
    let file_name = record.file().unwrap_or(UNKNOWN_FILE);
    (stream, file_name, record.line().unwrap_or(0))
}

/// Installs [`DebugLogger`] as the global `log` logger.
///
/// Fails if another logger was installed first.
pub fn install() -> Result<(), DebugLogError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if ENABLED {
        LevelFilter::Trace
    } else {
        LevelFilter::Off
    });
    Ok(())
}
