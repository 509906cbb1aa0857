//! # Burn Central Debug Log
//!
//! A conditional debug logger. Each line carries the source location it came from and a
//! severity derived from the stream it is written to:
//!
//! ```text
//! [<file>:<line>] [<LEVEL>] <message>
//! ```
//!
//! Lines written to stderr are tagged `ERROR` and lines written to stdout `INFO`.
//! Messages are formatted into a bounded buffer of [`BUFFER_SIZE`] bytes. A message that
//! does not fit, or that fails to format, is dropped without writing anything.
//!
//! Everything is gated behind the `debug` cargo feature. Without it the entry points
//! compile to no-ops and their arguments are never formatted. When it is enabled,
//! [`LoggerConfig`] can still switch logging off at runtime.
//!
//! ```
//! use burn_central_dbglog::Stream;
//!
//! burn_central_dbglog::log!(Stream::Stderr, "main.rs", 42, "value={}", 7);
//! burn_central_dbglog::info!("loaded {} records", 3);
//! ```

mod bridge;
mod buffer;
mod config;
mod error;
mod level;
mod logger;
mod stream;

pub use bridge::{DebugLogger, UNKNOWN_FILE, install};
pub use buffer::{BUFFER_SIZE, format_message};
pub use config::{
    ENV_CAPACITY, ENV_COLOR, ENV_ENABLED, ENV_OVERFLOW, LoggerConfig, OverflowPolicy, config, init,
};
pub use error::DebugLogError;
pub use level::Level;
pub use logger::{ENABLED, Logger, try_vlog, vlog, vlog_with_level, write_record};
pub use stream::Stream;

/// Logs a formatted message to `stream` with an explicit source location.
///
/// `log!(stream, file_name, line, format, args...)` captures the format arguments and
/// forwards them to [`vlog`].
#[macro_export]
macro_rules! log {
    ($stream:expr, $file:expr, $line:expr, $($arg:tt)+) => {
        $crate::vlog($stream, $file, $line, ::core::format_args!($($arg)+))
    };
}

/// Logs a formatted message to stderr, tagged with the caller's file and line.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Stream::Stderr, ::core::file!(), ::core::line!(), $($arg)+)
    };
}

/// Logs a formatted message to stdout, tagged with the caller's file and line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Stream::Stdout, ::core::file!(), ::core::line!(), $($arg)+)
    };
}
