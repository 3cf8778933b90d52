//! # Fleet Registry
//!
//! Transports and the goods on board. Loading, travelling and unloading take
//! simulated time; the registry serves one request at a time, so a transport
//! that is being loaded cannot be sent on its way before the load finishes.
//!
//! - [`entity`] - [`RegistryEntity`](crate::framework::RegistryEntity) for [`Transport`](crate::transport::Transport) and [`TransportId`]
//! - [`actions`] - [`FleetAction`] and [`FleetActionResult`]
//! - [`error`] - [`FleetError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::TransportId;
pub use error::*;

use crate::framework::{Registry, RegistryClient};
use crate::transport::Transport;

pub fn new(buffer_size: usize) -> (Registry<Transport>, RegistryClient<Transport>) {
    Registry::new(buffer_size)
}
