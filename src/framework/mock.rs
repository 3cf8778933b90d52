//! # Mock Registry Helpers
//!
//! Test a client wrapper without spawning a registry: build a client over a
//! bare channel, then pull requests off the other end and answer them by hand.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Milk>(10);
//! let (packed, _) = create_mock_client::<PackedMilk>(10);
//! let dairy = DairyClient::new(client, packed);
//! let task = tokio::spawn(async move { dairy.instant_pasteurization(MilkId(1)).await });
//!
//! let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
//! responder.send(Ok(DairyActionResult::Scheduled { ready_in })).unwrap();
//! ```

use super::client::RegistryClient;
use super::entity::RegistryEntity;
use super::message::{Request, Response};
use tokio::sync::mpsc;

pub fn create_mock_client<T: RegistryEntity>(
    buffer_size: usize,
) -> (RegistryClient<T>, mpsc::Receiver<Request<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a create.
pub async fn expect_create<T: RegistryEntity>(
    receiver: &mut mpsc::Receiver<Request<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(Request::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

pub async fn expect_get<T: RegistryEntity>(
    receiver: &mut mpsc::Receiver<Request<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(Request::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_action<T: RegistryEntity>(
    receiver: &mut mpsc::Receiver<Request<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(Request::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
