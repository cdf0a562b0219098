//! restkit library interface
//!
//! Shared building blocks for REST clients and services.
//!
//! # Module Organization
//!
//! - [`rest_error`] - REST error payloads (RestError)
//! - [`client`] - Request dispatch (Dispatcher, RequestBody, HttpResponse, DispatcherConfig)
//! - [`mock`] - Canned responses for tests (Mock, MockRegistry)
//! - [`logger`] - Structured logging (Logger, NoOpLogger, LoggerConfig)
//! - [`errors`] - Error types (RestkitError, Result)
//! - [`http`] - HTTP method helpers

pub mod client;
pub mod errors;
pub mod http;
pub mod logger;
pub mod mock;
pub mod rest_error;

pub use client::{Dispatcher, DispatcherConfig, HttpResponse, RequestBody};
pub use errors::{RestkitError, Result};
pub use logger::{Logger, LoggerConfig, NoOpLogger, StructuredLog};
pub use mock::{Mock, MockRegistry};
pub use rest_error::RestError;
