//! The message protocol between [`RegistryClient`](super::RegistryClient) and
//! [`Registry`](super::Registry).

use super::entity::RegistryEntity;
use super::error::RegistryError;
use tokio::sync::oneshot;

/// Where the registry sends the answer to a request.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

#[derive(Debug)]
pub enum Request<T: RegistryEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
