#![forbid(unsafe_code)]
//! Leveled line logging with request metadata.
//!
//! ```
//! use reqlog_core::fields;
//! use reqlog_core::logger::{LogLevel, Logger, Logging, RequestContext, Threshold};
//!
//! let mut buf = Vec::new();
//! let mut logger = Logger::with_threshold(&mut buf, Threshold::new(LogLevel::Info));
//! let ctx = RequestContext::new().with_request_id("12345");
//! logger.info(&ctx, "User logged in", &fields! { "svc" => "auth" }).unwrap();
//! drop(logger);
//! assert_eq!(buf, b"INFO: User logged in svc=auth requestID=12345\n");
//! ```
pub mod config;
pub mod logger;
