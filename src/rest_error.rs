//! REST error payloads
//!
//! [`RestError`] is the value services return to describe a failed call and
//! clients decode from an error response body. The wire shape is:
//!
//! ```json
//! {"error": true, "status_code": 404, "message": "user not found"}
//! ```

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::{RestkitError, Result};

/// Immutable REST error value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestError {
    #[serde(rename = "error")]
    is_error: bool,
    status_code: u16,
    message: String,
}

impl RestError {
    /// Create an error with an arbitrary status code
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            status_code,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST.as_u16(), message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED.as_u16(), message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND.as_u16(), message)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), message)
    }

    /// Decode an error payload, typically the body of a non-2xx response
    pub fn from_bytes(payload: &[u8]) -> Result<Self> {
        serde_json::from_slice(payload)
            .map_err(|e| RestkitError::Decode(format!("invalid error json response: {}", e)))
    }

    /// Encode as the JSON wire shape
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| RestkitError::Serialization(e.to_string()))
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Typed status, `None` when the code is outside 100..=999
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status_code, self.message)
    }
}

impl std::error::Error for RestError {}
