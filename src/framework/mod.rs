//! Generic registry actor.
//!
//! - [`RegistryEntity`] - what an entity implements to live in a registry
//! - [`Registry`] - the actor task owning the entities
//! - [`RegistryClient`] - the cloneable sending half
//! - [`Scheduler`] - delayed follow-up actions
//! - [`RegistryError`] - plumbing failures
//!
//! See [`mock`] for testing clients without a running registry.

pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod registry;
pub mod schedule;

pub use client::RegistryClient;
pub use entity::RegistryEntity;
pub use error::RegistryError;
pub use message::{Request, Response};
pub use registry::Registry;
pub use schedule::Scheduler;
