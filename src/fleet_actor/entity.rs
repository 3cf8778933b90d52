//! [`RegistryEntity`] implementation for [`Transport`].

use super::actions::{FleetAction, FleetActionResult};
use super::error::FleetError;
use crate::framework::{RegistryEntity, Scheduler};
use crate::transport::{Pace, Transport, TransportCreate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Key of a transport in the fleet registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportId(pub u32);

impl From<u32> for TransportId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TransportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transport_{}", self.0)
    }
}

#[async_trait]
impl RegistryEntity for Transport {
    type Id = TransportId;
    type Create = TransportCreate;
    type Action = FleetAction;
    type ActionResult = FleetActionResult;
    type Context = Pace;
    type Error = FleetError;

    fn from_create_params(_id: TransportId, params: TransportCreate) -> Result<Self, FleetError> {
        Ok(Transport::new(params)?)
    }

    /// Every transport in the fleet moves at the fleet's pace.
    async fn on_create(&mut self, pace: &Pace) -> Result<(), FleetError> {
        self.set_pace(*pace);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: FleetAction,
        _pace: &Pace,
        _scheduler: &Scheduler<Self>,
    ) -> Result<FleetActionResult, FleetError> {
        match action {
            FleetAction::Load(goods) => Ok(FleetActionResult::Load(self.load(goods).await)),
            FleetAction::Travel(distance) => {
                self.transportation(distance).await?;
                Ok(FleetActionResult::Travel(()))
            }
            FleetAction::Unload => Ok(FleetActionResult::Unload(self.unload().await)),
        }
    }
}
