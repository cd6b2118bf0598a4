//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//!
//! The in-memory repository covers the happy paths; store failures are
//! simulated with the mockall-generated `MockPostRepository`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
