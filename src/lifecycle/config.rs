//! # Simulation Configuration
//!
//! ```text
//!   1. COLD_CHAIN_TIME_UNIT_MS / COLD_CHAIN_REGISTRY_BUFFER   (highest)
//!   2. JSON file named by COLD_CHAIN_CONFIG
//!   3. defaults                                                (lowest)
//! ```
//!
//! ```json
//! { "time_unit_ms": 50, "registry_buffer": 64 }
//! ```

use crate::error::{SupplyError, SupplyResult};
use crate::transport::Pace;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

pub const CONFIG_PATH_ENV: &str = "COLD_CHAIN_CONFIG";
pub const TIME_UNIT_ENV: &str = "COLD_CHAIN_TIME_UNIT_MS";
pub const REGISTRY_BUFFER_ENV: &str = "COLD_CHAIN_REGISTRY_BUFFER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Wall-clock length of one simulated time unit, in milliseconds.
    pub time_unit_ms: u64,
    /// Request queue length of each registry.
    pub registry_buffer: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: 1000,
            registry_buffer: 32,
        }
    }
}

impl SimulationConfig {
    /// Loads from the process environment.
    pub fn load() -> SupplyResult<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads using `lookup` in place of the process environment.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> SupplyResult<Self> {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.validate()?;
        info!(
            time_unit_ms = config.time_unit_ms,
            registry_buffer = config.registry_buffer,
            "Simulation config loaded"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> SupplyResult<Self> {
        info!(?path, "Loading simulation config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SupplyError::InvalidConfig(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| SupplyError::InvalidConfig(format!("{}: {e}", path.display())))
    }

    fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> SupplyResult<()> {
        if let Some(raw) = lookup(TIME_UNIT_ENV) {
            self.time_unit_ms = parse_override(TIME_UNIT_ENV, &raw)?;
            debug!(time_unit_ms = self.time_unit_ms, "Overriding time unit from environment");
        }
        if let Some(raw) = lookup(REGISTRY_BUFFER_ENV) {
            self.registry_buffer = parse_override(REGISTRY_BUFFER_ENV, &raw)?;
            debug!(
                registry_buffer = self.registry_buffer,
                "Overriding registry buffer from environment"
            );
        }
        Ok(())
    }

    pub fn validate(&self) -> SupplyResult<()> {
        if self.registry_buffer == 0 {
            return Err(SupplyError::InvalidConfig(
                "registry_buffer must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn pace(&self) -> Pace {
        Pace::new(Duration::from_millis(self.time_unit_ms))
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> SupplyResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| SupplyError::InvalidConfig(format!("{key}={raw:?}: {e}")))
}
