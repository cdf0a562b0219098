//! HTTP method constants and utilities

use reqwest::Method;
use tracing::warn;

use crate::errors::{RestkitError, Result};

/// HTTP GET method
pub const GET: &str = "GET";

/// HTTP POST method
pub const POST: &str = "POST";

/// HTTP PUT method
pub const PUT: &str = "PUT";

/// HTTP PATCH method
pub const PATCH: &str = "PATCH";

/// HTTP DELETE method
pub const DELETE: &str = "DELETE";

/// HTTP HEAD method
pub const HEAD: &str = "HEAD";

/// HTTP OPTIONS method
pub const OPTIONS: &str = "OPTIONS";

/// All standard HTTP methods
pub const STANDARD_METHODS: &[&str] = &[GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS];

/// Check if a string is a standard HTTP method
pub fn is_standard(method: &str) -> bool {
    STANDARD_METHODS.iter().any(|&m| m.eq_ignore_ascii_case(method))
}

/// Canonical spelling of a method: trimmed and upper-cased.
///
/// Mock keys and outgoing requests both go through this, so `"post"` and
/// `"POST"` address the same mock.
pub fn normalize(method: &str) -> String {
    method.trim().to_ascii_uppercase()
}

/// Parse a method string into a transport method.
///
/// Extension methods such as `PURGE` are accepted with a warning.
pub fn parse(method: &str) -> Result<Method> {
    let normalized = normalize(method);
    if normalized.is_empty() {
        return Err(RestkitError::InvalidMethod(method.to_string()));
    }
    let parsed = Method::from_bytes(normalized.as_bytes())
        .map_err(|_| RestkitError::InvalidMethod(method.to_string()))?;

    if !is_standard(&normalized) {
        warn!(method = %normalized, "Non-standard HTTP method");
    }
    Ok(parsed)
}
