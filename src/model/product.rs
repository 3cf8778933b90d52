//! A food product travelling through the supply chain.
//!
//! # Goods
//! [`Product`] and its specialisations ([`Milk`](crate::model::Milk),
//! [`PackedMilk`](crate::model::PackedMilk)) implement [`Goods`](crate::model::Goods),
//! which is all a [`Transport`](crate::transport::Transport) needs to know to
//! account for weight and volume.

use crate::error::{SupplyError, SupplyResult};
use crate::model::fields::{format_duration, Fields};
use chrono::TimeDelta;
use serde_json::Value;
use std::fmt;

/// A food product travelling through the supply chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    /// Shelf life counted from production, not an absolute date.
    pub shelf_life: TimeDelta,
    /// Net weight, kg.
    pub weight: f64,
    pub recommended_temperature: f64,
    pub current_temperature: f64,
    pub volume: f64,
}

/// Payload for building a [`Product`].
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub shelf_life: TimeDelta,
    pub weight: f64,
    pub recommended_temperature: f64,
    pub current_temperature: f64,
    pub volume: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// No range checks: a negative weight or volume is stored as given.
    pub fn new(params: ProductCreate) -> Self {
        Self {
            name: params.name,
            shelf_life: params.shelf_life,
            weight: params.weight,
            recommended_temperature: params.recommended_temperature,
            current_temperature: params.current_temperature,
            volume: params.volume,
        }
    }
}

impl ProductCreate {
    /// Reads every product field except `product_name`, which subtypes fix.
    pub(crate) fn from_fields(fields: &Fields<'_>, name: String) -> SupplyResult<Self> {
        Ok(Self {
            name,
            shelf_life: fields.duration("product_shelf_life")?,
            weight: fields.number("weight")?,
            recommended_temperature: fields.number("recommended_temperature")?,
            current_temperature: fields.number("current_temperature")?,
            volume: fields.number("product_volume")?,
        })
    }
}

impl TryFrom<&Value> for ProductCreate {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        let fields = Fields::new(value, "product")?;
        let name = fields.text("product_name")?;
        Self::from_fields(&fields, name)
    }
}

impl TryFrom<&Value> for Product {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        ProductCreate::try_from(value).map(Product::new)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product name: {}", self.name)?;
        writeln!(f, "Weight (net), kg: {}", self.weight)?;
        writeln!(f, "Recommended temperature: {} C", self.recommended_temperature)?;
        writeln!(f, "Current temperature: {} C", self.current_temperature)?;
        write!(f, "Product exp. date: {}", format_duration(self.shelf_life))
    }
}
