use crate::framework::{RegistryClient, RegistryEntity, RegistryError};
use async_trait::async_trait;

/// Shared behaviour of the typed registry clients.
///
/// Implementors expose their inner [`RegistryClient`] and get a typed `get`
/// for free, with registry failures converted into their own error type.
#[async_trait]
pub trait ActorClient<T: RegistryEntity>: Send + Sync {
    type Error: From<RegistryError> + Send + Sync;

    fn inner(&self) -> &RegistryClient<T>;

    /// Fetch a snapshot of an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Into::into)
    }
}
