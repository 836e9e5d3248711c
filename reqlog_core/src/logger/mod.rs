pub mod context;
pub mod fields;
pub mod level;
pub mod threshold;

pub use context::{RequestContext, RequestId, UserId};
pub use fields::Fields;
pub use level::{level_name, LevelParseError, LogLevel};
pub use threshold::Threshold;

use crate::config::LoggerConfig;
use std::fmt::Write as _;
use std::io::Write;
use thiserror::Error;

/// Leveled, field annotated logging
///
/// `error` takes the error itself and logs its description as the message.
pub trait Logging {
    fn debug(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError>;
    fn info(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError>;
    fn warn(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError>;
    fn error(
        &mut self,
        ctx: &RequestContext,
        err: &dyn std::error::Error,
        fields: &Fields,
    ) -> Result<(), LogError>;
    fn fatal(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError>;
}

/// Writes one line per call to a caller supplied sink.
///
/// Lines look like `LEVEL: message[ key=value]*[ requestID=id][ userID=id]`.
/// Calls below the threshold write nothing and succeed.
/// The sink is never flushed or closed; pass `&mut sink` to keep ownership of it.
pub struct Logger<W: Write> {
    sink: W,
    threshold: Threshold,
}

impl<W: Write> Logger<W> {
    /// Logger filtered by the process-wide threshold.
    pub fn new(sink: W) -> Self {
        Logger::with_threshold(sink, Threshold::global())
    }

    pub fn with_threshold(sink: W, threshold: Threshold) -> Self {
        Logger { sink, threshold }
    }

    pub fn from_config(sink: W, config: &LoggerConfig) -> Self {
        Logger::with_threshold(sink, Threshold::new(config.log_level))
    }

    /// Sets the level for every logger sharing this logger's threshold.
    pub fn set_log_level(&self, level: LogLevel) {
        self.threshold.set(level);
    }

    pub fn log_level(&self) -> LogLevel {
        self.threshold.get()
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn log(
        &mut self,
        level: LogLevel,
        ctx: &RequestContext,
        msg: &str,
        fields: &Fields,
    ) -> Result<(), LogError> {
        if !self.threshold.allows(level) {
            return Ok(());
        }
        let line = format_line(level, ctx, msg, fields);
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl<W: Write> Logging for Logger<W> {
    fn debug(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError> {
        self.log(LogLevel::Debug, ctx, msg, fields)
    }

    fn info(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError> {
        self.log(LogLevel::Info, ctx, msg, fields)
    }

    fn warn(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError> {
        self.log(LogLevel::Warn, ctx, msg, fields)
    }

    fn error(
        &mut self,
        ctx: &RequestContext,
        err: &dyn std::error::Error,
        fields: &Fields,
    ) -> Result<(), LogError> {
        self.log(LogLevel::Error, ctx, &err.to_string(), fields)
    }

    fn fatal(&mut self, ctx: &RequestContext, msg: &str, fields: &Fields) -> Result<(), LogError> {
        self.log(LogLevel::Fatal, ctx, msg, fields)
    }
}

/// Complete line for a call, newline included.
pub fn format_line(level: LogLevel, ctx: &RequestContext, msg: &str, fields: &Fields) -> String {
    // Writing into a `String` cannot fail.
    let mut line = format!("{}: {}", level, msg);
    for (key, value) in fields.iter() {
        let _ = write!(line, " {}={}", key, value);
    }
    if let Some(request_id) = &ctx.request_id {
        let _ = write!(line, " requestID={}", request_id);
    }
    if let Some(user_id) = &ctx.user_id {
        let _ = write!(line, " userID={}", user_id);
    }
    line.push('\n');
    line
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed writing log line: {0}")]
    Write(#[from] std::io::Error),
}
