//! Dispatcher configuration

use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::{RestkitError, Result};

pub const USER_AGENT_STRING: &str = concat!("restkit/", env!("CARGO_PKG_VERSION"));

/// Transport settings for a [`Dispatcher`](super::Dispatcher)
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Whole-request deadline; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Deadline for establishing the connection
    pub connect_timeout: Option<Duration>,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: USER_AGENT_STRING.to_string(),
        }
    }
}

impl DispatcherConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the blocking transport client
    pub(crate) fn build_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| RestkitError::Config(format!("Failed to build HTTP client: {}", e)))
    }
}
