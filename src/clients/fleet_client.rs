//! # Fleet Client
//!
//! Registers transports and moves goods with them.

use crate::clients::actor_client::ActorClient;
use crate::fleet_actor::{FleetAction, FleetActionResult, FleetError, TransportId};
use crate::framework::RegistryClient;
use crate::model::{into_cargo, Article, Goods};
use crate::transport::{Transport, TransportCreate, TruckClass};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct FleetClient {
    inner: RegistryClient<Transport>,
}

impl FleetClient {
    pub fn new(inner: RegistryClient<Transport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Transport> for FleetClient {
    type Error = FleetError;

    fn inner(&self) -> &RegistryClient<Transport> {
        &self.inner
    }
}

impl FleetClient {
    #[instrument(skip(self))]
    pub async fn register_transport(
        &self,
        params: TransportCreate,
    ) -> Result<TransportId, FleetError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Registers a truck whose weight capacity is its class payload.
    pub async fn register_truck(
        &self,
        class: TruckClass,
        speed: f64,
        volume: f64,
        temperature: f64,
    ) -> Result<TransportId, FleetError> {
        self.register_transport(TransportCreate::for_class(class, speed, volume, temperature))
            .await
    }

    #[instrument(skip(self, payload))]
    pub async fn register_transport_json(&self, payload: &Value) -> Result<TransportId, FleetError> {
        let params = TransportCreate::try_from(payload)?;
        self.register_transport(params).await
    }

    /// Loads the whole batch, or nothing if it does not fit.
    #[instrument(skip(self, goods), fields(items = goods.len()))]
    pub async fn load(
        &self,
        id: TransportId,
        goods: Vec<Arc<dyn Goods>>,
    ) -> Result<bool, FleetError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FleetAction::Load(goods)).await? {
            FleetActionResult::Load(accepted) => Ok(accepted),
            _ => unreachable!("Load action must return Load result"),
        }
    }

    /// Like [`load`](Self::load), for loosely-typed articles. A pack on its own
    /// is rejected before the transport is touched.
    pub async fn load_articles(
        &self,
        id: TransportId,
        articles: Vec<Article>,
    ) -> Result<bool, FleetError> {
        let goods = into_cargo(articles)?;
        self.load(id, goods).await
    }

    #[instrument(skip(self))]
    pub async fn transportation(&self, id: TransportId, distance: f64) -> Result<(), FleetError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, FleetAction::Travel(distance))
            .await?
        {
            FleetActionResult::Travel(()) => Ok(()),
            _ => unreachable!("Travel action must return Travel result"),
        }
    }

    /// Empties the transport and hands back what was on board.
    #[instrument(skip(self))]
    pub async fn unload(&self, id: TransportId) -> Result<Vec<Arc<dyn Goods>>, FleetError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FleetAction::Unload).await? {
            FleetActionResult::Unload(goods) => Ok(goods),
            _ => unreachable!("Unload action must return Unload result"),
        }
    }
}
