//! [`RegistryEntity`] implementations for [`Milk`] and [`PackedMilk`].
//!
//! A pasteurization request only books the programme; the heat treatment and
//! shelf life change when the scheduler delivers the finishing action. The
//! "not yet treated" guard is evaluated at that moment, so two programmes
//! booked back to back both run and only the first to finish has an effect.

use super::actions::{DairyAction, DairyActionResult};
use super::error::DairyError;
use crate::framework::{RegistryEntity, Scheduler};
use crate::model::{Milk, MilkCreate, PackedMilk, PackedMilkCreate, PasteurizationMethod};
use crate::transport::Pace;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::info;

/// Key of a milk batch in the dairy registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilkId(pub u32);

impl From<u32> for MilkId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MilkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "milk_{}", self.0)
    }
}

/// Key of a packed milk batch in the dairy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackedMilkId(pub u32);

impl From<u32> for PackedMilkId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PackedMilkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "packed_milk_{}", self.0)
    }
}

/// A dairy batch that can go through a pasteurization programme.
pub trait Pasteurizable {
    fn apply_pasteurization(&mut self, method: PasteurizationMethod) -> bool;
}

impl Pasteurizable for Milk {
    fn apply_pasteurization(&mut self, method: PasteurizationMethod) -> bool {
        Milk::apply_pasteurization(self, method)
    }
}

impl Pasteurizable for PackedMilk {
    fn apply_pasteurization(&mut self, method: PasteurizationMethod) -> bool {
        PackedMilk::apply_pasteurization(self, method)
    }
}

/// Books or finishes a programme on any kind of batch.
fn run_programme<T>(
    batch: &mut T,
    action: DairyAction,
    pace: &Pace,
    scheduler: &Scheduler<T>,
) -> Result<DairyActionResult, DairyError>
where
    T: RegistryEntity<Action = DairyAction> + Pasteurizable,
{
    match action {
        DairyAction::Pasteurize(method) => {
            let ready_in = pace.units(method.delay_units())?;
            scheduler.schedule(ready_in, DairyAction::FinishPasteurization(method))?;
            info!(
                batch_id = %scheduler.entity_id(),
                %method,
                ?ready_in,
                "Pasteurization started"
            );
            Ok(DairyActionResult::Scheduled { ready_in })
        }
        DairyAction::FinishPasteurization(method) => {
            let applied = batch.apply_pasteurization(method);
            Ok(DairyActionResult::Finished { applied })
        }
    }
}

#[async_trait]
impl RegistryEntity for Milk {
    type Id = MilkId;
    type Create = MilkCreate;
    type Action = DairyAction;
    type ActionResult = DairyActionResult;
    type Context = Pace;
    type Error = DairyError;

    fn from_create_params(_id: MilkId, params: MilkCreate) -> Result<Self, DairyError> {
        Ok(Milk::new(params))
    }

    async fn handle_action(
        &mut self,
        action: DairyAction,
        pace: &Pace,
        scheduler: &Scheduler<Self>,
    ) -> Result<DairyActionResult, DairyError> {
        run_programme(self, action, pace, scheduler)
    }
}

#[async_trait]
impl RegistryEntity for PackedMilk {
    type Id = PackedMilkId;
    type Create = PackedMilkCreate;
    type Action = DairyAction;
    type ActionResult = DairyActionResult;
    type Context = Pace;
    type Error = DairyError;

    fn from_create_params(
        _id: PackedMilkId,
        params: PackedMilkCreate,
    ) -> Result<Self, DairyError> {
        Ok(PackedMilk::new(params))
    }

    async fn handle_action(
        &mut self,
        action: DairyAction,
        pace: &Pace,
        scheduler: &Scheduler<Self>,
    ) -> Result<DairyActionResult, DairyError> {
        run_programme(self, action, pace, scheduler)
    }
}
