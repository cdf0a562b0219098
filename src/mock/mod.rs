//! Canned responses for tests
//!
//! A [`MockRegistry`] holds [`Mock`]s keyed by method and URL. While the
//! registry is enabled, a [`Dispatcher`](crate::client::Dispatcher) sharing it
//! answers from the registry instead of the network.

pub mod registry;

pub use registry::{mock_id, Mock, MockRegistry};
