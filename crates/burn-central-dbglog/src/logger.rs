use std::fmt;
use std::io::Write;

use derive_new::new;

use crate::{DebugLogError, Level, LoggerConfig, Stream};
#[cfg(feature = "debug")]
use crate::{buffer::format_message, config::config};

/// Whether the logger was compiled in.
pub const ENABLED: bool = cfg!(feature = "debug");

/// Formats one line and writes it to `out` in a single `write_all`.
///
/// The emitted bytes are `[<file_name>:<line>] [<LEVEL>] <message>\n`. Nothing is written
/// unless the whole line could be built, so a failed call never leaves a partial line
/// behind. Returns the number of bytes written.
#[cfg(feature = "debug")]
pub fn write_record<W: Write + ?Sized>(
    out: &mut W,
    level: Level,
    file_name: &str,
    line: u32,
    args: fmt::Arguments<'_>,
    config: &LoggerConfig,
) -> Result<usize, DebugLogError> {
    let record = render(level, file_name, line, args, config)?;
    out.write_all(record.as_bytes())?;
    Ok(record.len())
}

#[cfg(not(feature = "debug"))]
pub fn write_record<W: Write + ?Sized>(
    _out: &mut W,
    _level: Level,
    _file_name: &str,
    _line: u32,
    _args: fmt::Arguments<'_>,
    _config: &LoggerConfig,
) -> Result<usize, DebugLogError> {
    Err(DebugLogError::Disabled)
}

#[cfg(feature = "debug")]
fn render(
    level: Level,
    file_name: &str,
    line: u32,
    args: fmt::Arguments<'_>,
    config: &LoggerConfig,
) -> Result<String, DebugLogError> {
    if !config.enabled {
        return Err(DebugLogError::Disabled);
    }
    let message = format_message(args, config.overflow, config.capacity)?;
    Ok(format!(
        "[{}:{}] [{}] {}\n",
        file_name,
        line,
        level.label(config.color),
        message
    ))
}

/// Like [`vlog_with_level`], but reports why a line was not written.
#[cfg(feature = "debug")]
pub fn try_vlog(
    stream: Stream,
    level: Level,
    file_name: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) -> Result<usize, DebugLogError> {
    let record = render(level, file_name, line, args, config())?;
    stream.write_all(record.as_bytes())?;
    Ok(record.len())
}

#[cfg(not(feature = "debug"))]
pub fn try_vlog(
    _stream: Stream,
    _level: Level,
    _file_name: &str,
    _line: u32,
    _args: fmt::Arguments<'_>,
) -> Result<usize, DebugLogError> {
    Err(DebugLogError::Disabled)
}

/// Writes one line to `stream`, tagged with the severity the stream implies.
///
/// Lines that cannot be formatted within bounds are dropped silently. Prefer the
/// [`log!`](crate::log!) macro, which captures the arguments for you.
pub fn vlog(stream: Stream, file_name: &str, line: u32, args: fmt::Arguments<'_>) {
    vlog_with_level(stream, stream.level(), file_name, line, args);
}

/// Writes one line to `stream` with an explicit severity.
#[cfg(feature = "debug")]
pub fn vlog_with_level(
    stream: Stream,
    level: Level,
    file_name: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) {
    let _ = try_vlog(stream, level, file_name, line, args);
}

#[cfg(not(feature = "debug"))]
pub fn vlog_with_level(
    _stream: Stream,
    _level: Level,
    _file_name: &str,
    _line: u32,
    _args: fmt::Arguments<'_>,
) {
}

/// Logger writing to an arbitrary destination at a fixed severity.
#[derive(new, Debug)]
pub struct Logger<W: Write> {
    writer: W,
    level: Level,
    #[new(default)]
    config: LoggerConfig,
}

impl<W: Write> Logger<W> {
    pub fn with_config(writer: W, level: Level, config: LoggerConfig) -> Self {
        Self {
            writer,
            level,
            config,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn log(
        &mut self,
        file_name: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> Result<usize, DebugLogError> {
        write_record(
            &mut self.writer,
            self.level,
            file_name,
            line,
            args,
            &self.config,
        )
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;
    use crate::{OverflowPolicy, buffer::BUFFER_SIZE};
    use rstest::rstest;

    fn record(
        level: Level,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> (Vec<u8>, Result<usize, DebugLogError>) {
        let mut out = Vec::new();
        let result = write_record(&mut out, level, file, line, args, &LoggerConfig::default());
        (out, result)
    }

    #[test]
    fn writes_the_documented_shape() {
        let (out, result) = record(Level::Error, "main.c", 42, format_args!("value={}", 7));
        assert_eq!(out, b"[main.c:42] [ERROR] value=7\n");
        assert_eq!(result.unwrap(), out.len());
    }

    #[rstest]
    #[case(Stream::Stderr, "[lib.rs:1] [ERROR] hello\n")]
    #[case(Stream::Stdout, "[lib.rs:1] [INFO] hello\n")]
    fn label_follows_stream(#[case] stream: Stream, #[case] expected: &str) {
        let (out, _) = record(stream.level(), "lib.rs", 1, format_args!("hello"));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[rstest]
    #[case(BUFFER_SIZE - 1, true)]
    #[case(BUFFER_SIZE, false)]
    #[case(BUFFER_SIZE * 3, false)]
    fn oversized_messages_are_dropped(#[case] len: usize, #[case] written: bool) {
        let body = "z".repeat(len);
        let (out, result) = record(Level::Info, "a.rs", 3, format_args!("{body}"));
        assert_eq!(!out.is_empty(), written);
        assert_eq!(result.is_ok(), written);
        if written {
            assert!(out.ends_with(format!("{body}\n").as_bytes()));
        }
    }

    #[test]
    fn empty_message_is_dropped() {
        let (out, result) = record(Level::Info, "a.rs", 3, format_args!(""));
        assert!(out.is_empty());
        assert!(matches!(result, Err(DebugLogError::EmptyMessage)));
    }

    #[test]
    fn runtime_switch_disables_output() {
        let config = LoggerConfig {
            enabled: false,
            ..LoggerConfig::default()
        };
        let mut out = Vec::new();
        let result = write_record(&mut out, Level::Error, "a.rs", 1, format_args!("x"), &config);
        assert!(out.is_empty());
        assert!(matches!(result, Err(DebugLogError::Disabled)));
    }

    #[test]
    fn grow_policy_writes_long_messages() {
        let config = LoggerConfig {
            overflow: OverflowPolicy::Grow,
            ..LoggerConfig::default()
        };
        let body = "g".repeat(BUFFER_SIZE * 2);
        let mut logger = Logger::with_config(Vec::new(), Level::Info, config);
        logger.log("big.rs", 9, format_args!("{body}")).unwrap();
        let out = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(out, format!("[big.rs:9] [INFO] {body}\n"));
    }

    #[test]
    fn colored_label_wraps_only_the_level() {
        colored::control::set_override(true);
        let config = LoggerConfig {
            color: true,
            ..LoggerConfig::default()
        };
        let mut logger = Logger::with_config(Vec::new(), Level::Error, config);
        logger.log("c.rs", 5, format_args!("boom")).unwrap();
        colored::control::unset_override();
        let out = String::from_utf8(logger.into_inner()).unwrap();
        assert!(out.starts_with("[c.rs:5] ["));
        assert!(out.ends_with("] boom\n"));
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn logger_uses_its_level() {
        let mut logger = Logger::new(Vec::new(), Level::Info);
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.config(), &LoggerConfig::default());
        logger.log("x.rs", 10, format_args!("{}-{}", "a", 1)).unwrap();
        logger.log("x.rs", 11, format_args!("second")).unwrap();
        assert_eq!(
            logger.into_inner(),
            b"[x.rs:10] [INFO] a-1\n[x.rs:11] [INFO] second\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_failure_is_reported() {
        let mut logger = Logger::new(FailingWriter, Level::Error);
        let err = logger.log("w.rs", 1, format_args!("x")).unwrap_err();
        assert!(matches!(err, DebugLogError::Io(_)));
    }

    #[test]
    fn vlog_on_standard_streams_does_not_panic() {
        vlog(Stream::Stdout, "std.rs", 1, format_args!("to stdout"));
        vlog(Stream::Stderr, "std.rs", 2, format_args!("to stderr"));
        vlog_with_level(Stream::Stdout, Level::Error, "std.rs", 3, format_args!("explicit"));
    }
}
