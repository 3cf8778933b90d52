//! # Dairy Registry
//!
//! Milk batches, loose or packed, waiting for or going through pasteurization.
//! Loose and packed batches live in two registries with the same actions.
//!
//! - [`entity`] - [`RegistryEntity`](crate::framework::RegistryEntity) for [`Milk`] and [`PackedMilk`], their ids
//! - [`actions`] - [`DairyAction`] and [`DairyActionResult`]
//! - [`error`] - [`DairyError`]
//!
//! ```rust,ignore
//! let (registry, client) = dairy_actor::new(32);
//! tokio::spawn(registry.run(Pace::default()));
//! let dairy = DairyClient::new(client);
//!
//! let id = dairy.register_milk(params).await?;
//! let ready_in = dairy.instant_pasteurization(id).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{MilkId, PackedMilkId, Pasteurizable};
pub use error::*;

use crate::framework::{Registry, RegistryClient};
use crate::model::{Milk, PackedMilk};

pub fn new(buffer_size: usize) -> (Registry<Milk>, RegistryClient<Milk>) {
    Registry::new(buffer_size)
}

pub fn new_packed(buffer_size: usize) -> (Registry<PackedMilk>, RegistryClient<PackedMilk>) {
    Registry::new(buffer_size)
}
