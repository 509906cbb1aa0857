use thiserror::Error;

/// Reasons a log line was not emitted, or a logger could not be set up.
///
/// The silent entry points ([`vlog`](crate::vlog) and the macros) swallow these. The
/// `try_*` entry points and [`Logger`](crate::Logger) surface them.
#[derive(Error, Debug)]
pub enum DebugLogError {
    #[error("Debug logging is disabled")]
    Disabled,
    #[error("Formatted message is empty")]
    EmptyMessage,
    #[error("Formatted message does not fit in a buffer of {capacity} bytes")]
    Truncated { capacity: usize },
    #[error("Failed to format message")]
    Format(#[from] std::fmt::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid logger configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Invalid logger configuration: {0}")]
    InvalidConfig(String),
    #[error("Logger configuration is already initialized")]
    AlreadyInitialized,
    #[error("Failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl DebugLogError {
    /// Whether the line was dropped because of the size bound.
    pub fn is_truncation(&self) -> bool {
        matches!(self, DebugLogError::Truncated { .. })
    }
}
