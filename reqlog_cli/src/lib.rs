use crate::opts::{EmitOpt, RunOpt};
use reqlog_core::config::{ConfigError, LoggerConfig};
use reqlog_core::logger::{Fields, LogError, LogLevel, Logger, Logging, RequestContext, Threshold};
use std::fs::File;
use std::io::{self, Write};
use thiserror::Error;

pub mod opts;

pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Info);
    }
    builder
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

/// Sample call sites: one console logger and one file logger sharing the
/// process-wide threshold.
pub fn run(opt: &RunOpt) -> Result<(), CliError> {
    let level = match &opt.config {
        Some(config_file) => LoggerConfig::try_new(config_file)?.log_level,
        None => LogLevel::Debug,
    };
    log::debug!("Console log level: {}", level);

    let stdout = io::stdout();
    let mut console_logger = Logger::new(stdout.lock());
    console_logger.set_log_level(level);

    let mut file_logger = match File::create(&opt.log_file) {
        Ok(file) => Some(Logger::new(file)),
        Err(err) => {
            log::error!(
                "Failed to create log file '{}': {}",
                opt.log_file.to_string_lossy(),
                err
            );
            None
        }
    };

    let ctx = RequestContext::new()
        .with_request_id("12345")
        .with_user_id("67890");

    let fields = Fields::new().with("svc", "auth");
    console_logger.info(&ctx, "User logged in", &fields)?;
    if let Some(file_logger) = file_logger.as_mut() {
        let fields = Fields::new().with("svc", "db");
        file_logger.error(&ctx, &ReportedError::DatabaseConnection, &fields)?;
        file_logger.debug(&ctx, "Some debug output", &Fields::default())?;
        log::info!("Wrote log file '{}'", opt.log_file.to_string_lossy());
    }
    Ok(())
}

/// Writes one line to stdout with its own threshold.
pub fn emit(opt: &EmitOpt) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut logger = Logger::with_threshold(stdout.lock(), Threshold::new(opt.threshold));
    emit_to(&mut logger, opt)
}

fn emit_to<L: Logging>(logger: &mut L, opt: &EmitOpt) -> Result<(), CliError> {
    let mut ctx = RequestContext::new();
    if let Some(id) = &opt.request_id {
        ctx = ctx.with_request_id(id.as_str());
    }
    if let Some(id) = &opt.user_id {
        ctx = ctx.with_user_id(id.as_str());
    }
    let fields: Fields = opt
        .fields
        .iter()
        .map(|kv| (kv.key.as_str(), kv.value.as_str()))
        .collect();
    let msg = opt.message.as_str();
    match opt.level {
        LogLevel::Debug => logger.debug(&ctx, msg, &fields)?,
        LogLevel::Info => logger.info(&ctx, msg, &fields)?,
        LogLevel::Warn => logger.warn(&ctx, msg, &fields)?,
        LogLevel::Error => logger.error(&ctx, &ReportedError::Message(String::from(msg)), &fields)?,
        LogLevel::Fatal => logger.fatal(&ctx, msg, &fields)?,
    };
    Ok(())
}

#[derive(Debug, Error)]
enum ReportedError {
    #[error("database connection failed")]
    DatabaseConnection,
    #[error("{0}")]
    Message(String),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Logger config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Log error: {0}")]
    Log(#[from] LogError),
}
