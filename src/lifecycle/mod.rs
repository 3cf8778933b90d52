//! # System Lifecycle
//!
//! - [`SimulationConfig`] - how long a time unit is, how deep the queues are
//! - [`SupplySystem`] - spawns the dairy and fleet registries and stops them
//! - [`setup_tracing`] - the log subscriber
//!
//! Registries have no dependencies on each other; the only thing injected at
//! `run` time is the shared [`Pace`](crate::transport::Pace).

pub mod config;
pub mod supply_system;
pub mod tracing;

pub use config::*;
pub use supply_system::*;
pub use self::tracing::setup_tracing;
