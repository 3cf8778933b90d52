//! # Cold Chain demo
//!
//! 1. Starts a [`SupplySystem`].
//! 2. Registers a transport and moves five bottles of packed milk.
//! 3. Sterilizes a batch of milk and waits for the programme to finish.

use chrono::TimeDelta;
use cold_chain::clients::ActorClient;
use cold_chain::lifecycle::{setup_tracing, SimulationConfig, SupplySystem};
use cold_chain::model::{
    Goods, HeatTreatment, MilkCreate, PackCreate, PackedMilk, PackedMilkCreate,
};
use cold_chain::transport::TransportCreate;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

fn bottle() -> PackedMilkCreate {
    PackedMilkCreate {
        milk: MilkCreate {
            heat_treatment: HeatTreatment::NotPasteurized,
            fat_percent: 20.0,
            volume: 2.0,
            shelf_life: TimeDelta::days(5),
            weight: 0.8,
            recommended_temperature: 3.0,
            current_temperature: 2.0,
        },
        pack: PackCreate {
            material: "glass".to_string(),
            tightness: true,
            volume: 2.0,
            shelf_life: TimeDelta::days(3),
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SimulationConfig::load().map_err(|e| e.to_string())?;
    let system = SupplySystem::new(&config);

    let delivery = async {
        let transport = system
            .fleet
            .register_transport(TransportCreate {
                speed: 10.0,
                volume: 50.0,
                weight: 100.0,
                temperature: 36.6,
            })
            .await?;

        let goods: Vec<Arc<dyn Goods>> = (0..5)
            .map(|_| Arc::new(PackedMilk::new(bottle())) as Arc<dyn Goods>)
            .collect();
        let accepted = system.fleet.load(transport, goods).await?;
        info!(%transport, accepted, "Loaded");

        system.fleet.transportation(transport, 20.0).await?;
        let unloaded = system.fleet.unload(transport).await?;
        info!(%transport, items = unloaded.len(), "Delivered");

        if let Some(state) = system.fleet.get(transport).await? {
            info!(%transport, "\n{}", state);
        }
        Ok::<_, cold_chain::fleet_actor::FleetError>(())
    }
    .instrument(tracing::info_span!("delivery"));
    delivery.await.map_err(|e| e.to_string())?;

    let dairy = async {
        let batch = system.dairy.register_milk(bottle().milk).await?;
        let ready_in = system.dairy.instant_pasteurization(batch).await?;
        tokio::time::sleep(ready_in + Duration::from_millis(10)).await;

        if let Some(milk) = system.dairy.get(batch).await? {
            info!(%batch, "\n{}", milk);
        }
        Ok::<_, cold_chain::dairy_actor::DairyError>(())
    }
    .instrument(tracing::info_span!("pasteurization"));
    dairy.await.map_err(|e| e.to_string())?;

    system.shutdown().await;
    info!("Simulation completed");
    Ok(())
}
