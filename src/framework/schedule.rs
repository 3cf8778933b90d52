//! Delayed follow-up actions.
//!
//! A hook that starts something long-running (a pasteurization programme, say)
//! returns at once and asks the [`Scheduler`] to deliver the finishing action
//! later. The finishing action travels through the registry's own channel, so
//! it is applied in order with every other request and never races the store.

use super::entity::RegistryEntity;
use super::error::RegistryError;
use super::message::Request;
use super::registry::entity_type;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;
use tracing::{debug, warn};

/// Sends actions to one entity of a running registry after a delay.
///
/// Handed to [`RegistryEntity::handle_action`] by the registry; it is bound to
/// the entity the current action targets.
pub struct Scheduler<T: RegistryEntity> {
    id: T::Id,
    sender: mpsc::WeakSender<Request<T>>,
}

impl<T: RegistryEntity> Scheduler<T> {
    pub(crate) fn new(id: T::Id, sender: mpsc::WeakSender<Request<T>>) -> Self {
        Self { id, sender }
    }

    pub fn entity_id(&self) -> &T::Id {
        &self.id
    }

    /// Delivers `action` to the bound entity once `delay` has elapsed.
    ///
    /// The pending timer holds the registry open: a registry whose clients are
    /// all gone still waits for its scheduled actions before shutting down.
    pub fn schedule(&self, delay: Duration, action: T::Action) -> Result<(), RegistryError> {
        let sender = self.sender.upgrade().ok_or(RegistryError::ActorClosed)?;
        let id = self.id.clone();
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?action, ?delay, "Scheduled");

        tokio::spawn(async move {
            sleep(delay).await;
            let (respond_to, response) = oneshot::channel();
            let request = Request::Action {
                id: id.clone(),
                action,
                respond_to,
            };
            if sender.send(request).await.is_err() {
                warn!(entity_type, %id, "Registry closed before scheduled action");
                return;
            }
            match response.await {
                Ok(Ok(result)) => debug!(entity_type, %id, ?result, "Scheduled action done"),
                Ok(Err(e)) => warn!(entity_type, %id, error = %e, "Scheduled action failed"),
                Err(_) => warn!(entity_type, %id, "Registry dropped scheduled action"),
            }
        });
        Ok(())
    }
}
