use reqlog_core::logger::LogLevel;
use std::path;
use std::str::FromStr;
use structopt::StructOpt;
use thiserror::Error;

#[derive(Debug, StructOpt)]
#[structopt(name = "reqlog", about = "Leveled logging with request metadata")]
pub enum Opt {
    ///Log sample lines to the console and to a log file
    #[structopt(name = "run")]
    Run(RunOpt),
    ///Log a single line to stdout
    #[structopt(name = "emit")]
    Emit(EmitOpt),
}

impl Opt {
    pub fn verbose(&self) -> bool {
        match self {
            Self::Run(opt) => opt.verbose,
            Self::Emit(opt) => opt.verbose,
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct RunOpt {
    /// JSON logger config, overrides the console level
    #[structopt(long)]
    pub config: Option<path::PathBuf>,
    #[structopt(long, default_value = "app.log")]
    pub log_file: path::PathBuf,
    #[structopt(long)]
    verbose: bool,
}

#[derive(Debug, StructOpt)]
pub struct EmitOpt {
    #[structopt(long, default_value = "info")]
    pub level: LogLevel,
    /// Lowest level that is written
    #[structopt(long, default_value = "info")]
    pub threshold: LogLevel,
    #[structopt(long, default_value = "")]
    pub message: String,
    /// Field as `key=value`, may be repeated
    #[structopt(long = "field")]
    pub fields: Vec<KeyValue>,
    #[structopt(long)]
    pub request_id: Option<String>,
    #[structopt(long)]
    pub user_id: Option<String>,
    #[structopt(long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl FromStr for KeyValue {
    type Err = KeyValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| KeyValueError::MissingSeparator(String::from(s)))?;
        if key.is_empty() {
            return Err(KeyValueError::EmptyKey(String::from(s)));
        }
        Ok(KeyValue {
            key: String::from(key),
            value: String::from(value),
        })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyValueError {
    #[error("Expected 'key=value', got '{0}'")]
    MissingSeparator(String),
    #[error("Empty key in '{0}'")]
    EmptyKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value() {
        let kv: KeyValue = "svc=auth".parse().unwrap();
        assert_eq!(kv.key, "svc");
        assert_eq!(kv.value, "auth");
        let kv: KeyValue = "query=a=b".parse().unwrap();
        assert_eq!(kv.value, "a=b");
        let kv: KeyValue = "empty=".parse().unwrap();
        assert_eq!(kv.value, "");
    }

    #[test]
    fn test_key_value_invalid() {
        assert_eq!(
            "svc".parse::<KeyValue>(),
            Err(KeyValueError::MissingSeparator(String::from("svc")))
        );
        assert_eq!(
            "=auth".parse::<KeyValue>(),
            Err(KeyValueError::EmptyKey(String::from("=auth")))
        );
    }

    #[test]
    fn test_parse_emit() {
        let opt = Opt::from_iter_safe(&[
            "reqlog",
            "emit",
            "--level",
            "warn",
            "--message",
            "disk almost full",
            "--field",
            "disk=sda1",
            "--field",
            "used=93",
            "--user-id",
            "user123",
        ])
        .unwrap();
        match opt {
            Opt::Emit(emit) => {
                assert_eq!(emit.level, LogLevel::Warn);
                assert_eq!(emit.threshold, LogLevel::Info);
                assert_eq!(emit.fields.len(), 2);
                assert_eq!(emit.request_id, None);
                assert_eq!(emit.user_id.as_deref(), Some("user123"));
            }
            Opt::Run(_) => panic!("parsed as run"),
        }
    }

    #[test]
    fn test_parse_run_defaults() {
        let opt = Opt::from_iter_safe(&["reqlog", "run", "--verbose"]).unwrap();
        assert!(opt.verbose());
        match opt {
            Opt::Run(run) => {
                assert_eq!(run.log_file, path::PathBuf::from("app.log"));
                assert!(run.config.is_none());
            }
            Opt::Emit(_) => panic!("parsed as emit"),
        }
    }

    #[test]
    fn test_parse_bad_level() {
        assert!(Opt::from_iter_safe(&["reqlog", "emit", "--level", "loud"]).is_err());
    }
}
