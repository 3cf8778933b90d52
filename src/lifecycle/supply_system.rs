use crate::clients::{DairyClient, FleetClient};
use crate::lifecycle::config::SimulationConfig;
use crate::{dairy_actor, fleet_actor};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// The dairy and fleet registries running side by side, sharing one [`Pace`](crate::transport::Pace).
pub struct SupplySystem {
    pub dairy: DairyClient,
    pub fleet: FleetClient,
    handles: Vec<JoinHandle<()>>,
}

impl SupplySystem {
    /// Spawns the registries on the current tokio runtime.
    pub fn new(config: &SimulationConfig) -> Self {
        let pace = config.pace();

        let (dairy_registry, dairy_client) = dairy_actor::new(config.registry_buffer);
        let (packed_registry, packed_client) = dairy_actor::new_packed(config.registry_buffer);
        let (fleet_registry, fleet_client) = fleet_actor::new(config.registry_buffer);

        let dairy_handle = tokio::spawn(dairy_registry.run(pace));
        let packed_handle = tokio::spawn(packed_registry.run(pace));
        let fleet_handle = tokio::spawn(fleet_registry.run(pace));
        info!(time_unit = ?pace.time_unit(), "Supply system started");

        Self {
            dairy: DairyClient::new(dairy_client, packed_client),
            fleet: FleetClient::new(fleet_client),
            handles: vec![dairy_handle, packed_handle, fleet_handle],
        }
    }

    /// Drops the clients and waits for every registry to stop.
    ///
    /// Pasteurizations still in progress complete first. Clients cloned out of
    /// the system keep their registry running until they are dropped too.
    pub async fn shutdown(self) {
        drop(self.dairy);
        drop(self.fleet);

        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "Registry task failed");
            }
        }
        info!("Supply system stopped");
    }
}
