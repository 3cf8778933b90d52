//! # Dairy Client
//!
//! Registers milk batches, loose or packed, and starts pasteurization
//! programmes on them.

use crate::clients::actor_client::ActorClient;
use crate::dairy_actor::{DairyAction, DairyActionResult, DairyError, MilkId, PackedMilkId};
use crate::framework::{RegistryClient, RegistryEntity};
use crate::model::{Milk, MilkCreate, PackedMilk, PackedMilkCreate, PasteurizationMethod};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct DairyClient {
    inner: RegistryClient<Milk>,
    packed: RegistryClient<PackedMilk>,
}

impl DairyClient {
    pub fn new(inner: RegistryClient<Milk>, packed: RegistryClient<PackedMilk>) -> Self {
        Self { inner, packed }
    }
}

#[async_trait]
impl ActorClient<Milk> for DairyClient {
    type Error = DairyError;

    fn inner(&self) -> &RegistryClient<Milk> {
        &self.inner
    }
}

/// Books `method` on a batch in either registry.
async fn start_programme<T>(
    registry: &RegistryClient<T>,
    id: T::Id,
    method: PasteurizationMethod,
) -> Result<Duration, DairyError>
where
    T: RegistryEntity<Action = DairyAction, ActionResult = DairyActionResult>,
{
    match registry
        .perform_action(id, DairyAction::Pasteurize(method))
        .await?
    {
        DairyActionResult::Scheduled { ready_in } => Ok(ready_in),
        DairyActionResult::Finished { .. } => {
            unreachable!("Pasteurize action must return Scheduled result")
        }
    }
}

impl DairyClient {
    #[instrument(skip(self, params))]
    pub async fn register_milk(&self, params: MilkCreate) -> Result<MilkId, DairyError> {
        debug!(?params, "Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Registers a batch described as JSON. Fields of the wrong type are
    /// reported before anything reaches the registry.
    #[instrument(skip(self, payload))]
    pub async fn register_milk_json(&self, payload: &Value) -> Result<MilkId, DairyError> {
        let params = MilkCreate::try_from(payload)?;
        self.register_milk(params).await
    }

    /// Starts `method` on the batch and returns how long it will take.
    ///
    /// The batch is only changed when the programme finishes, and only if it
    /// was still untreated at that moment.
    #[instrument(skip(self))]
    pub async fn pasteurize(
        &self,
        id: MilkId,
        method: PasteurizationMethod,
    ) -> Result<Duration, DairyError> {
        debug!("Sending request");
        start_programme(&self.inner, id, method).await
    }

    /// Sterilizes the batch: two time units, +5 days of shelf life.
    pub async fn instant_pasteurization(&self, id: MilkId) -> Result<Duration, DairyError> {
        self.pasteurize(id, PasteurizationMethod::Instant).await
    }

    /// Pasteurizes the batch: ten time units, +7 days of shelf life.
    pub async fn fast_pasteurization(&self, id: MilkId) -> Result<Duration, DairyError> {
        self.pasteurize(id, PasteurizationMethod::Fast).await
    }

    /// Ultra-pasteurizes the batch: twenty time units, +14 days of shelf life.
    pub async fn long_pasteurization(&self, id: MilkId) -> Result<Duration, DairyError> {
        self.pasteurize(id, PasteurizationMethod::Long).await
    }

    #[instrument(skip(self, params))]
    pub async fn register_packed_milk(
        &self,
        params: PackedMilkCreate,
    ) -> Result<PackedMilkId, DairyError> {
        debug!(?params, "Sending request");
        Ok(self.packed.create(params).await?)
    }

    /// JSON counterpart of [`register_packed_milk`](Self::register_packed_milk):
    /// one flat object with the milk and the pack fields.
    #[instrument(skip(self, payload))]
    pub async fn register_packed_milk_json(
        &self,
        payload: &Value,
    ) -> Result<PackedMilkId, DairyError> {
        let params = PackedMilkCreate::try_from(payload)?;
        self.register_packed_milk(params).await
    }

    #[instrument(skip(self))]
    pub async fn get_packed(&self, id: PackedMilkId) -> Result<Option<PackedMilk>, DairyError> {
        debug!("Sending request");
        Ok(self.packed.get(id).await?)
    }

    /// Same programmes as [`pasteurize`](Self::pasteurize), run on a packed batch.
    #[instrument(skip(self))]
    pub async fn pasteurize_packed(
        &self,
        id: PackedMilkId,
        method: PasteurizationMethod,
    ) -> Result<Duration, DairyError> {
        debug!("Sending request");
        start_programme(&self.packed, id, method).await
    }

    pub async fn instant_pasteurization_packed(
        &self,
        id: PackedMilkId,
    ) -> Result<Duration, DairyError> {
        self.pasteurize_packed(id, PasteurizationMethod::Instant).await
    }

    pub async fn fast_pasteurization_packed(
        &self,
        id: PackedMilkId,
    ) -> Result<Duration, DairyError> {
        self.pasteurize_packed(id, PasteurizationMethod::Fast).await
    }

    pub async fn long_pasteurization_packed(
        &self,
        id: PackedMilkId,
    ) -> Result<Duration, DairyError> {
        self.pasteurize_packed(id, PasteurizationMethod::Long).await
    }
}
