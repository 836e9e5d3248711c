use crate::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Logger configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    #[serde(default)]
    pub log_level: LogLevel,
}

impl LoggerConfig {
    pub fn try_new(config_file: &Path) -> Result<LoggerConfig, ConfigError> {
        let mut f = fs::File::open(config_file)?;
        let mut config_string = String::new();
        f.read_to_string(&mut config_string)?;
        LoggerConfig::parse(&config_string)
    }

    pub fn parse(config_string: &str) -> Result<LoggerConfig, ConfigError> {
        serde_json::from_str(config_string).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error opening config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}
