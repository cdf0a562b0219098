//! Mock definitions and the registry that stores them

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use reqwest::StatusCode;

use crate::client::HttpResponse;
use crate::errors::{RestkitError, Result};
use crate::http;

/// Registry key for a method and URL: `METHOD_url`
pub fn mock_id(method: &str, url: &str) -> String {
    format!("{}_{}", http::normalize(method), url)
}

/// A canned outcome for one method and URL
#[derive(Debug, Clone)]
pub struct Mock {
    method: String,
    url: String,
    outcome: std::result::Result<HttpResponse, String>,
}

impl Mock {
    /// Mock answering `200 OK` with an empty body until told otherwise
    pub fn new(method: &str, url: impl Into<String>) -> Self {
        Self {
            method: http::normalize(method),
            url: url.into(),
            outcome: Ok(HttpResponse::new(StatusCode::OK)),
        }
    }

    /// Answer with this response
    pub fn respond_with(mut self, response: HttpResponse) -> Self {
        self.outcome = Ok(response);
        self
    }

    /// Fail with [`RestkitError::MockFailure`] carrying this message
    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.outcome = Err(message.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn id(&self) -> String {
        mock_id(&self.method, &self.url)
    }

    fn outcome(&self) -> Result<HttpResponse> {
        self.outcome
            .clone()
            .map_err(RestkitError::MockFailure)
    }
}

#[derive(Debug, Default)]
struct MockState {
    enabled: bool,
    mocks: HashMap<String, Mock>,
}

/// Thread-safe store of mocks plus the enabled switch.
///
/// Owned by the caller (usually a test) and shared with dispatchers through
/// `Arc`.
#[derive(Debug, Default)]
pub struct MockRegistry {
    state: Mutex<MockState>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start answering dispatches from the registry
    pub fn enable(&self) {
        self.lock().enabled = true;
    }

    /// Go back to real network I/O. Registered mocks are kept.
    pub fn disable(&self) {
        self.lock().enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Store a mock, returning the one it replaced
    pub fn register(&self, mock: Mock) -> Option<Mock> {
        self.lock().mocks.insert(mock.id(), mock)
    }

    /// Drop every registered mock. The enabled switch is left as is.
    pub fn clear(&self) {
        self.lock().mocks.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().mocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().mocks.is_empty()
    }

    pub fn contains(&self, method: &str, url: &str) -> bool {
        self.lock().mocks.contains_key(&mock_id(method, url))
    }

    /// Answer a dispatch from the registry.
    ///
    /// `None` while disabled, meaning the caller goes to the network. When
    /// enabled, the matching mock's outcome, or [`RestkitError::NoMockFound`].
    pub fn resolve(&self, method: &str, url: &str) -> Option<Result<HttpResponse>> {
        let state = self.lock();
        if !state.enabled {
            return None;
        }

        let outcome = match state.mocks.get(&mock_id(method, url)) {
            Some(mock) => mock.outcome(),
            None => Err(RestkitError::NoMockFound {
                method: http::normalize(method),
                url: url.to_string(),
            }),
        };
        Some(outcome)
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // State stays consistent across a panicking holder: every write is a
        // single field or map operation.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
