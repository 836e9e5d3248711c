use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Name used for ordinals outside of the enumerated levels.
pub const UNKNOWN_LEVEL_NAME: &str = "UNKNOWN";

#[derive(
    Deserialize, Serialize, Display, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display("DEBUG")]
    Debug,
    #[display("INFO")]
    Info,
    #[display("WARN")]
    Warn,
    #[display("ERROR")]
    Error,
    #[display("FATAL")]
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Canonical uppercase name, as it appears at the start of a log line.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

/// Canonical name for a raw level ordinal, `UNKNOWN` when out of range.
pub fn level_name(ordinal: u8) -> &'static str {
    LogLevel::from_ordinal(ordinal).map_or(UNKNOWN_LEVEL_NAME, LogLevel::name)
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl TryFrom<&str> for LogLevel {
    type Error = LevelParseError;
    fn try_from(value: &str) -> Result<Self, LevelParseError> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LevelParseError::Unknown(String::from(value))),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LevelParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::try_from(s)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LevelParseError {
    #[error("Unknown log level '{0}'")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ord() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
        assert!(!(LogLevel::Debug > LogLevel::Info));
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = LogLevel::ALL.iter().map(|level| level.name()).collect();
        assert_eq!(names.len(), LogLevel::ALL.len());
        assert!(!names.contains(UNKNOWN_LEVEL_NAME));
    }

    #[test]
    fn test_name_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string(), level.name());
            assert_eq!(LogLevel::try_from(level.name()), Ok(level));
            assert_eq!(LogLevel::from_ordinal(level.ordinal()), Some(level));
            assert_eq!(level_name(level.ordinal()), level.name());
        }
    }

    #[test]
    fn test_unknown_ordinal() {
        assert_eq!(LogLevel::from_ordinal(5), None);
        assert_eq!(level_name(5), "UNKNOWN");
        assert_eq!(level_name(u8::MAX), "UNKNOWN");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Fatal".parse::<LogLevel>(), Ok(LogLevel::Fatal));
        assert_eq!(
            "verbose".parse::<LogLevel>(),
            Err(LevelParseError::Unknown(String::from("verbose")))
        );
    }

    #[test]
    fn test_serde_lowercase() {
        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
        assert_eq!(serde_json::to_string(&LogLevel::Error).unwrap(), "\"error\"");
    }
}
