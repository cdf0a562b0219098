//! Request dispatch
//!
//! Builds a request from a method, URL, body and headers and sends it over a
//! blocking transport, unless the shared [`MockRegistry`] is enabled, in which
//! case the registry answers instead.

use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::body::{Payload, RequestBody};
use super::config::DispatcherConfig;
use super::response::HttpResponse;
use crate::errors::{RestkitError, Result};
use crate::http;
use crate::mock::MockRegistry;

/// Sends requests, consulting a mock registry first
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    mocks: Arc<MockRegistry>,
}

impl Dispatcher {
    /// Dispatcher with default transport settings and its own registry
    pub fn new() -> Result<Self> {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Result<Self> {
        Self::with_registry(config, Arc::new(MockRegistry::new()))
    }

    /// Dispatcher sharing a caller-owned registry
    pub fn with_registry(config: DispatcherConfig, mocks: Arc<MockRegistry>) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
            mocks,
        })
    }

    pub fn mocks(&self) -> &Arc<MockRegistry> {
        &self.mocks
    }

    /// Send `body` to `url` with the given method and headers.
    ///
    /// Strings are the payload verbatim. [`RequestBody::Json`] values are
    /// encoded and get `Content-Type: application/json` unless `headers` sets
    /// one. `()` or [`RequestBody::Empty`] sends no payload.
    pub fn request(
        &self,
        method: &str,
        url: &str,
        body: impl Into<RequestBody>,
        headers: &HeaderMap,
    ) -> Result<HttpResponse> {
        if let Some(outcome) = self.mocked(method, url) {
            return outcome;
        }

        let method = http::parse(method)?;
        let payload = body.into().into_payload()?;
        self.send(method, url, payload, headers)
    }

    /// Send any serializable value as JSON.
    ///
    /// The value is only encoded when the request reaches the transport, so a
    /// mocked call never fails on serialization.
    pub fn request_json<B: Serialize + ?Sized>(
        &self,
        method: &str,
        url: &str,
        body: &B,
        headers: &HeaderMap,
    ) -> Result<HttpResponse> {
        if let Some(outcome) = self.mocked(method, url) {
            return outcome;
        }

        let method = http::parse(method)?;
        let payload = RequestBody::json(body)?.into_payload()?;
        self.send(method, url, payload, headers)
    }

    /// POST `form` URL-encoded to `url`
    pub fn post_form<F: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &F,
        headers: &HeaderMap,
    ) -> Result<HttpResponse> {
        if let Some(outcome) = self.mocked(http::POST, url) {
            return outcome;
        }

        let encoded = serde_urlencoded::to_string(form)
            .map_err(|e| RestkitError::Serialization(e.to_string()))?;
        self.send(Method::POST, url, Some(Payload::Form(encoded)), headers)
    }

    fn mocked(&self, method: &str, url: &str) -> Option<Result<HttpResponse>> {
        let outcome = self.mocks.resolve(method, url)?;
        debug!(method = %http::normalize(method), url = %url, mocked = true, "Request answered by mock");
        Some(outcome)
    }

    fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<Payload>,
        headers: &HeaderMap,
    ) -> Result<HttpResponse> {
        let parsed = Url::parse(url)?;

        let mut builder = self.client.request(method.clone(), parsed).headers(headers.clone());
        if let Some(payload) = payload {
            if !headers.contains_key(CONTENT_TYPE) {
                if let Some(content_type) = payload.content_type() {
                    builder = builder.header(CONTENT_TYPE, content_type);
                }
            }
            builder = builder.body(payload.into_bytes());
        }

        debug!(method = %method, url = %url, mocked = false, "Sending request");
        let response = HttpResponse::from_blocking(builder.send()?)?;
        debug!(
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            "Request completed"
        );

        Ok(response)
    }
}
