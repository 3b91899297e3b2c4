//! System lifecycle: configuration, logging setup and the [`FloorSystem`] that wires
//! and runs everything.

pub mod config;
pub mod floor_system;
pub mod tracing;

pub use config::FloorConfig;
pub use floor_system::FloorSystem;
pub use self::tracing::setup_tracing;
