//! Typed wrappers around [`RegistryClient`](crate::framework::RegistryClient).

pub mod actor_client;
pub mod dairy_client;
pub mod fleet_client;

pub use actor_client::*;
pub use dairy_client::*;
pub use fleet_client::*;
