//! Escalation signals returned by `panic` and `fatal` logging
//!
//! Logging at panic or fatal severity never aborts by itself. The logger
//! hands back an [`Escalation`] and the call site decides: [`Escalation::raise`]
//! to unwind or exit immediately, or return it from `main`, where it reports
//! the matching exit code.

use std::process::{ExitCode, Termination};

use thiserror::Error;

/// Exit code reported for [`Escalation::Fatal`]
pub const FATAL_EXIT_CODE: u8 = 1;

/// Exit code reported for [`Escalation::Panic`], the same code an uncaught
/// panic produces
pub const PANIC_EXIT_CODE: u8 = 101;

/// Request to abort, produced after the record has been written
#[must_use = "an escalation should be raised or returned to the caller"]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Escalation {
    /// Abort the current operation
    #[error("panic: {message}")]
    Panic { message: String },

    /// Terminate the process
    #[error("fatal: {message}")]
    Fatal { message: String },
}

impl Escalation {
    pub fn message(&self) -> &str {
        match self {
            Escalation::Panic { message } | Escalation::Fatal { message } => message,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Escalation::Panic { .. } => PANIC_EXIT_CODE,
            Escalation::Fatal { .. } => FATAL_EXIT_CODE,
        }
    }

    /// Act on the signal: unwind for `Panic`, exit the process for `Fatal`
    pub fn raise(self) -> ! {
        match self {
            Escalation::Panic { message } => std::panic::panic_any(message),
            Escalation::Fatal { .. } => std::process::exit(i32::from(FATAL_EXIT_CODE)),
        }
    }
}

impl From<Escalation> for ExitCode {
    fn from(escalation: Escalation) -> Self {
        ExitCode::from(escalation.exit_code())
    }
}

impl Termination for Escalation {
    fn report(self) -> ExitCode {
        ExitCode::from(self.exit_code())
    }
}
