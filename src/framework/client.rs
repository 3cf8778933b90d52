//! # Generic Client
//!
//! The sending half of a [`Registry`](super::Registry).

use super::entity::RegistryEntity;
use super::error::RegistryError;
use super::message::Request;
use tokio::sync::{mpsc, oneshot};

/// Cheap to clone; every clone feeds the same registry. The registry stops once
/// the last client (and the last pending scheduled action) is dropped.
pub struct RegistryClient<T: RegistryEntity> {
    sender: mpsc::Sender<Request<T>>,
}

impl<T: RegistryEntity> Clone for RegistryClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: RegistryEntity> RegistryClient<T> {
    pub fn new(sender: mpsc::Sender<Request<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request::Create { params, respond_to })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    /// A snapshot of the entity, or `None` when the id is unknown.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request::Get { id, respond_to })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }
}
