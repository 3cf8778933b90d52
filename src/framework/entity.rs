//! # RegistryEntity Trait
//!
//! The contract an entity fulfils to be owned by a [`Registry`](super::Registry):
//! associated types for its id, creation payload, actions and runtime context,
//! plus the hooks the registry calls while processing requests.

use super::schedule::Scheduler;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

#[async_trait]
pub trait RegistryEntity: Clone + Send + Sync + 'static {
    /// Key of the entity inside its registry, built from a sequential counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    type Create: Send + Sync + Debug;

    /// Domain operations beyond create and get.
    type Action: Send + Sync + Debug;

    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies handed to every hook, injected by `Registry::run`.
    type Context: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Runs `action` against this entity. The `scheduler` can queue a follow-up
    /// action for the same entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
        scheduler: &Scheduler<Self>,
    ) -> Result<Self::ActionResult, Self::Error>;
}
