//! # Registry Actor
//!
//! [`Registry`] owns every entity of one type and processes requests for them
//! one at a time, so the store needs no lock. Hooks may await (a transport
//! taking time to load, for instance); the registry serves the next request
//! once the current hook returns.
//!
//! ## Usage Pattern
//!
//! ```rust,ignore
//! let (registry, client) = Registry::<Milk>::new(32);
//! tokio::spawn(registry.run(pace));
//! let id = client.create(params).await?;
//! ```

use super::client::RegistryClient;
use super::entity::RegistryEntity;
use super::error::RegistryError;
use super::message::Request;
use super::schedule::Scheduler;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Short type name used as the `entity_type` field of every log line
/// (`Milk` rather than `cold_chain::model::milk::Milk`).
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

pub struct Registry<T: RegistryEntity> {
    receiver: mpsc::Receiver<Request<T>>,
    /// Weak so that the registry does not keep its own channel open.
    handle: mpsc::WeakSender<Request<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: RegistryEntity> Registry<T> {
    /// Creates the registry and its first client. `buffer_size` bounds the
    /// number of queued requests; senders wait while it is full.
    pub fn new(buffer_size: usize) -> (Self, RegistryClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let registry = Self {
            receiver,
            handle: sender.downgrade(),
            store: HashMap::new(),
            next_id: 1,
        };
        (registry, RegistryClient::new(sender))
    }

    /// Processes requests until every client and every scheduled action is gone.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Registry started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                Request::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(RegistryError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(RegistryError::EntityError(Box::new(e))));
                        }
                    }
                }
                Request::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                Request::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(RegistryError::NotFound(id.to_string())));
                        continue;
                    };
                    let scheduler = Scheduler::new(id.clone(), self.handle.clone());
                    let result = item
                        .handle_action(action, &context, &scheduler)
                        .await
                        .map_err(|e| RegistryError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
