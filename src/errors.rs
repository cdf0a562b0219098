//! Error types for restkit

use thiserror::Error;

/// Main error type for restkit
#[derive(Error, Debug)]
pub enum RestkitError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No mock found for {method} {url}")]
    NoMockFound {
        method: String,
        url: String,
    },

    #[error("Mocked failure: {0}")]
    MockFailure(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RestkitError {
    /// True when the error came from the mock registry rather than the network
    pub fn is_mock(&self) -> bool {
        matches!(self, RestkitError::NoMockFound { .. } | RestkitError::MockFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, RestkitError>;
