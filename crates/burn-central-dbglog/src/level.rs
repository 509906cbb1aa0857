use colored::Colorize;
use strum::{Display, EnumString};

/// Severity attached to every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Level {
    Error,
    Info,
}

impl Level {
    /// Label as it appears between the brackets of an emitted line.
    pub fn label(&self, color: bool) -> String {
        if !color {
            return self.to_string();
        }
        match self {
            Level::Error => self.to_string().red().bold().to_string(),
            Level::Info => self.to_string().cyan().bold().to_string(),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => Level::Error,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Info,
        }
    }
}
