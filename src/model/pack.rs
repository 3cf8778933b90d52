use crate::error::{SupplyError, SupplyResult};
use crate::model::fields::{format_duration, Fields};
use chrono::TimeDelta;
use serde_json::Value;
use std::fmt;

/// Packaging a product is sold in.
///
/// Immutable once built. The shelf life counts from the moment of packing.
#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    pub material: String,
    /// Whether the seal is intact.
    pub tightness: bool,
    /// Volume in liters.
    pub volume: f64,
    pub shelf_life: TimeDelta,
}

/// Payload for building a [`Pack`].
#[derive(Debug, Clone)]
pub struct PackCreate {
    pub material: String,
    pub tightness: bool,
    pub volume: f64,
    pub shelf_life: TimeDelta,
}

impl Pack {
    pub fn new(params: PackCreate) -> Self {
        Self {
            material: params.material,
            tightness: params.tightness,
            volume: params.volume,
            shelf_life: params.shelf_life,
        }
    }
}

impl TryFrom<&Value> for PackCreate {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        let fields = Fields::new(value, "pack")?;
        Ok(Self {
            material: fields.text("material")?,
            tightness: fields.flag("tightness")?,
            volume: fields.number("pack_volume")?,
            shelf_life: fields.duration("pack_shelf_life")?,
        })
    }
}

impl TryFrom<&Value> for Pack {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        PackCreate::try_from(value).map(Pack::new)
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Material: {}", self.material)?;
        writeln!(f, "Tightness: {}", if self.tightness { "yes" } else { "no" })?;
        writeln!(f, "Volume, liters: {}", self.volume)?;
        write!(f, "Pack exp. date: {}", format_duration(self.shelf_life))
    }
}
