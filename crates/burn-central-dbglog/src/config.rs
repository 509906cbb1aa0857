//! Runtime configuration of the debug logger.
//!
//! The `debug` cargo feature decides whether logging is compiled in at all. When it is,
//! [`LoggerConfig`] decides at runtime whether lines are emitted and how oversized
//! messages are handled. The process-wide configuration is set once, either explicitly
//! through [`init`] or lazily from the defaults and the `DBGLOG_*` environment variables.

use std::{env, fs, path::Path, str::FromStr};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{DebugLogError, buffer::BUFFER_SIZE};

pub const ENV_ENABLED: &str = "DBGLOG_ENABLED";
pub const ENV_OVERFLOW: &str = "DBGLOG_OVERFLOW";
pub const ENV_CAPACITY: &str = "DBGLOG_CAPACITY";
pub const ENV_COLOR: &str = "DBGLOG_COLOR";

static CONFIG: OnceCell<LoggerConfig> = OnceCell::new();

/// What to do with a message that does not fit in the configured capacity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OverflowPolicy {
    /// Discard the line without writing anything.
    #[default]
    Drop,
    /// Format into a buffer that grows as needed.
    Grow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub enabled: bool,
    pub overflow: OverflowPolicy,
    pub capacity: usize,
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            overflow: OverflowPolicy::Drop,
            capacity: BUFFER_SIZE,
            color: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, DebugLogError> {
        let config: LoggerConfig = toml::from_str(content)?;
        config.validate()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DebugLogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Applies the `DBGLOG_*` environment variables on top of `self`.
    pub fn with_env(self) -> Result<Self, DebugLogError> {
        self.with_vars(|key| env::var(key).ok())
    }

    fn with_vars(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DebugLogError> {
        if let Some(value) = lookup(ENV_ENABLED) {
            self.enabled = parse_bool(ENV_ENABLED, &value)?;
        }
        if let Some(value) = lookup(ENV_OVERFLOW) {
            self.overflow = OverflowPolicy::from_str(value.trim()).map_err(|_| {
                DebugLogError::InvalidConfig(format!("{ENV_OVERFLOW}: unknown policy {value:?}"))
            })?;
        }
        if let Some(value) = lookup(ENV_CAPACITY) {
            self.capacity = value.trim().parse().map_err(|_| {
                DebugLogError::InvalidConfig(format!("{ENV_CAPACITY}: not a size {value:?}"))
            })?;
        }
        if let Some(value) = lookup(ENV_COLOR) {
            self.color = parse_bool(ENV_COLOR, &value)?;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, DebugLogError> {
        if self.capacity == 0 {
            return Err(DebugLogError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, DebugLogError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DebugLogError::InvalidConfig(format!(
            "{key}: expected a boolean, got {value:?}"
        ))),
    }
}

/// Sets the process-wide configuration. Only the first call succeeds.
pub fn init(config: LoggerConfig) -> Result<(), DebugLogError> {
    let config = config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| DebugLogError::AlreadyInitialized)
}

/// The process-wide configuration.
///
/// Falls back to the defaults with environment overrides applied. An unreadable
/// environment leaves the defaults in place.
pub fn config() -> &'static LoggerConfig {
    CONFIG.get_or_init(|| LoggerConfig::default().with_env().unwrap_or_default())
}
