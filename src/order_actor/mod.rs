//! Order records: entity wiring and errors.

pub mod entity;
pub mod error;

pub use error::*;
