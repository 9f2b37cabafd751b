//! Wiring: starting the kitchen actor and shutting it down cleanly.

pub mod kitchen_system;
pub mod tracing;

pub use kitchen_system::*;
pub use self::tracing::setup_tracing;
