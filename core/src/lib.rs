//! lyricdraft core
//!
//! Domain model and use cases of a songwriting organizer: projects made of
//! ordered sections and lines, folders, tags, genre templates and a phrase
//! scratchpad. Uses hexagonal (ports & adapters) architecture; the hosted
//! backend implements `domain::ports`, and `adapters::memory` does the same
//! in-process.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod local;
pub mod presentation;
pub mod telemetry;

#[cfg(test)]
mod test_utils;

pub use error::{DomainError, ErrorKind, ValidationError};
pub use local::LocalApp;
