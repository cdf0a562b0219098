//! Common test utilities for restkit integration tests
//!
//! This module provides shared test infrastructure including:
//! - A local HTTP server (wiremock) usable from blocking test code
//! - Log capture helpers
//! - Unused port lookup for connection failure tests

#![allow(dead_code)]

use std::io::{self, Write};
use std::net::TcpListener;

use restkit::logger::{LogLevel, Logger, MemorySink};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

/// A wiremock server driven from synchronous tests.
///
/// The dispatcher blocks the calling thread, so tests stay synchronous and
/// only server setup and inspection go through the runtime.
pub struct TestServer {
    // Dropped before the runtime it was started on.
    server: MockServer,
    runtime: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("failed to build test runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    pub fn received(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

/// A localhost port with nothing listening on it
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind ephemeral port");
    listener.local_addr().expect("no local addr").port()
}

/// Logger writing to in-memory output and error sinks
pub fn capture_logger(level: LogLevel) -> (Logger, MemorySink, MemorySink) {
    let out = MemorySink::new();
    let err = MemorySink::new();
    let logger = Logger::from_sinks(level, vec![out.sink("out")], vec![err.sink("err")]);
    (logger, out, err)
}

/// Writer failing every write, for sink error reporting tests
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
