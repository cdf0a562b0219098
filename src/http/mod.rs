//! HTTP protocol types and constants
//!
//! Method handling shared by the dispatcher and the mock registry.

mod method;

pub use method::*;
