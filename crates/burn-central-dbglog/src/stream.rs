use std::io::{self, Write};

use crate::Level;

/// One of the two standard streams a line can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Severity implied by the stream: stderr carries errors, stdout carries info.
    pub fn level(&self) -> Level {
        match self {
            Stream::Stdout => Level::Info,
            Stream::Stderr => Level::Error,
        }
    }

    /// Writes `bytes` while holding the stream lock, so a line is never interleaved
    /// with another writer going through the same handle.
    #[cfg_attr(not(feature = "debug"), allow(dead_code))]
    pub(crate) fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Stream::Stderr => io::stderr().lock().write_all(bytes),
        }
    }
}

impl From<Level> for Stream {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Stream::Stderr,
            Level::Info => Stream::Stdout,
        }
    }
}
