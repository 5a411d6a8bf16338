//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Mocks are hand-written rather than generated: they store data in memory,
//! record each call by method name, and can be told to fail, which is all the
//! use case tests need.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
