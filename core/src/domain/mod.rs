//! Domain layer
//!
//! Contains pure business logic with no I/O.
//! - `value_objects`: self-validating field types and `EntityId`
//! - `entities`: songwriting aggregates
//! - `ports`: repository traits implemented by adapters
//! - `time`: timestamp normalization

pub mod entities;
pub mod ports;
pub mod time;
pub mod value_objects;
