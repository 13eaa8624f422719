//! System orchestration, startup, and shutdown logic.

pub mod record_system;
pub mod telemetry;

pub use record_system::*;
pub use telemetry::*;
