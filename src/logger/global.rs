//! Process-wide logger handle
//!
//! Nothing is configured implicitly. A binary installs its logger once at
//! startup; until then every call here goes to a [`NoOpLogger`].
//!
//! ```no_run
//! use restkit::logger::{global, Logger, LoggerConfig};
//!
//! # fn main() -> restkit::errors::Result<()> {
//! global::install(Logger::new(&LoggerConfig::from_env())?)?;
//! global::info("service started", &[]);
//! # Ok(())
//! # }
//! ```

use once_cell::sync::OnceCell;

use super::escalation::Escalation;
use super::field::Field;
use super::noop::NoOpLogger;
use super::structured::Logger;
use super::StructuredLog;
use crate::errors::{RestkitError, Result};

static GLOBAL: OnceCell<Logger> = OnceCell::new();
static NOOP: NoOpLogger = NoOpLogger;

/// Install the process-wide logger. Fails if one is already installed.
pub fn install(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| RestkitError::Config("global logger already installed".to_string()))
}

/// The installed logger, or a no-op one before [`install`]
pub fn get() -> &'static dyn StructuredLog {
    match GLOBAL.get() {
        Some(logger) => logger,
        None => &NOOP,
    }
}

pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}

pub fn debug(msg: &str, fields: &[Field]) {
    get().debug(msg, fields);
}

pub fn info(msg: &str, fields: &[Field]) {
    get().info(msg, fields);
}

pub fn warning(msg: &str, fields: &[Field]) {
    get().warning(msg, fields);
}

pub fn error(msg: &str, err: &dyn std::error::Error, fields: &[Field]) {
    get().error(msg, err, fields);
}

pub fn panic(msg: &str, err: &dyn std::error::Error, fields: &[Field]) -> Escalation {
    get().panic(msg, err, fields)
}

pub fn fatal(msg: &str, err: &dyn std::error::Error, fields: &[Field]) -> Escalation {
    get().fatal(msg, err, fields)
}
