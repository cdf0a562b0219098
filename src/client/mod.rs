//! HTTP client functionality
//!
//! [`Dispatcher`] sends requests over a blocking transport and returns fully
//! read [`HttpResponse`]s. Tests swap the network for canned answers through
//! the dispatcher's [`MockRegistry`](crate::mock::MockRegistry).
//!
//! ```no_run
//! use reqwest::header::HeaderMap;
//! use restkit::client::Dispatcher;
//!
//! # fn main() -> restkit::errors::Result<()> {
//! let dispatcher = Dispatcher::new()?;
//! let body = serde_json::json!({"name": "ada"});
//! let response = dispatcher.request_json("POST", "https://api.example.com/users", &body, &HeaderMap::new())?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod config;
pub mod dispatcher;
pub mod response;

// Re-exports
pub use body::RequestBody;
pub use config::{DispatcherConfig, USER_AGENT_STRING};
pub use dispatcher::Dispatcher;
pub use response::HttpResponse;
