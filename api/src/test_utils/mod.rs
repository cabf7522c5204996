//! Test utilities
//!
//! Hand-written mock implementations and test fixtures for unit testing.
//! The mocks wrap the real in-memory store so tests can inject failures
//! while keeping its versioning behavior.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
