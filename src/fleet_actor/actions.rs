//! Actions understood by the fleet registry.

use crate::model::Goods;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum FleetAction {
    /// All-or-nothing load of a batch.
    Load(Vec<Arc<dyn Goods>>),
    /// Travel the given distance.
    Travel(f64),
    Unload,
}

/// Results from FleetActions - variants match 1:1 with FleetAction
#[derive(Debug, Clone)]
pub enum FleetActionResult {
    Load(bool),
    Travel(()),
    Unload(Vec<Arc<dyn Goods>>),
}
