//! Structured logging
//!
//! [`Logger`] writes one JSON object per record to the sinks named in a
//! [`LoggerConfig`]:
//!
//! ```text
//! {"level":"error","time":"2026-10-17T09:14:03.512Z","msg":"charge failed","order":"A-17","error":"card declined"}
//! ```
//!
//! [`NoOpLogger`] implements the same [`StructuredLog`] trait and discards
//! everything. `panic` and `fatal` never abort on their own; they return an
//! [`Escalation`] for the caller to act on.

pub mod config;
pub mod escalation;
pub mod field;
pub mod global;
pub mod layer;
pub mod level;
pub mod noop;
pub mod sink;
pub mod structured;

use std::fmt;

pub use config::LoggerConfig;
pub use escalation::Escalation;
pub use field::{field, Field};
pub use level::LogLevel;
pub use noop::NoOpLogger;
pub use sink::{MemorySink, SinkWriter};
pub use structured::Logger;

/// Operations shared by every logger
pub trait StructuredLog: Send + Sync {
    /// Whether a record at `level` would be written
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Write a record at `level`
    fn log(&self, level: LogLevel, msg: &str, fields: &[Field]);

    /// Child logger attaching `fields` to every record
    fn with_fields(&self, fields: Vec<Field>) -> Self
    where
        Self: Sized;

    fn debug(&self, msg: &str, fields: &[Field]) {
        self.log(LogLevel::Debug, msg, fields);
    }

    fn info(&self, msg: &str, fields: &[Field]) {
        self.log(LogLevel::Info, msg, fields);
    }

    fn warning(&self, msg: &str, fields: &[Field]) {
        self.log(LogLevel::Warning, msg, fields);
    }

    /// Error record with `err` attached as the `error` field
    fn error(&self, msg: &str, err: &dyn std::error::Error, fields: &[Field]) {
        log_with_error(self, LogLevel::Error, msg, err, fields);
    }

    /// Log at panic severity and return the signal to abort the operation
    #[must_use]
    fn panic(&self, msg: &str, err: &dyn std::error::Error, fields: &[Field]) -> Escalation {
        log_with_error(self, LogLevel::Panic, msg, err, fields);
        Escalation::Panic {
            message: msg.to_string(),
        }
    }

    /// Log at fatal severity and return the signal to exit the process
    #[must_use]
    fn fatal(&self, msg: &str, err: &dyn std::error::Error, fields: &[Field]) -> Escalation {
        log_with_error(self, LogLevel::Fatal, msg, err, fields);
        Escalation::Fatal {
            message: msg.to_string(),
        }
    }

    /// Info record from preformatted arguments, for libraries that expect a
    /// `print`-style logger
    fn print(&self, args: fmt::Arguments<'_>) {
        if self.is_enabled(LogLevel::Info) {
            self.info(&args.to_string(), &[]);
        }
    }
}

fn log_with_error<L: StructuredLog + ?Sized>(
    logger: &L,
    level: LogLevel,
    msg: &str,
    err: &dyn std::error::Error,
    fields: &[Field],
) {
    if !logger.is_enabled(level) {
        return;
    }
    let mut fields = fields.to_vec();
    fields.push(Field::error(err));
    logger.log(level, msg, &fields);
}
