//! Logger that discards everything

use super::field::Field;
use super::level::LogLevel;
use super::StructuredLog;

/// Silences output. `panic` and `fatal` still return their escalation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpLogger;

impl StructuredLog for NoOpLogger {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _level: LogLevel, _msg: &str, _fields: &[Field]) {}

    fn with_fields(&self, _fields: Vec<Field>) -> Self {
        *self
    }
}
