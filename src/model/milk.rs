//! Milk and its heat-treatment state machine.
//!
//! ```text
//!                    instant (2 units, +5 days)
//!                  ┌──────────────────────────▶ Sterilized
//!                  │ fast (10 units, +7 days)
//! NotPasteurized ──┼──────────────────────────▶ Pasteurized
//!                  │ long (20 units, +14 days)
//!                  └──────────────────────────▶ UltraPasteurized
//! ```
//!
//! The transition itself is [`Milk::apply_pasteurization`]. Scheduling it after
//! the method's delay is the job of the dairy registry
//! ([`crate::dairy_actor`]).

use crate::error::{SupplyError, SupplyResult};
use crate::model::fields::{format_duration, Fields};
use crate::model::product::{Product, ProductCreate};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Degree of heat treatment a batch of milk went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatTreatment {
    #[default]
    NotPasteurized,
    Pasteurized,
    Sterilized,
    UltraPasteurized,
}

impl fmt::Display for HeatTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatTreatment::NotPasteurized => write!(f, "Not pasteurized"),
            HeatTreatment::Pasteurized => write!(f, "pasteurized"),
            HeatTreatment::Sterilized => write!(f, "sterilized"),
            HeatTreatment::UltraPasteurized => write!(f, "ultra pasteurized"),
        }
    }
}

impl FromStr for HeatTreatment {
    type Err = SupplyError;

    fn from_str(s: &str) -> SupplyResult<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "not pasteurized" => Ok(HeatTreatment::NotPasteurized),
            "pasteurized" => Ok(HeatTreatment::Pasteurized),
            "sterilized" => Ok(HeatTreatment::Sterilized),
            "ultra pasteurized" => Ok(HeatTreatment::UltraPasteurized),
            _ => Err(SupplyError::type_mismatch(
                "heat_treatment",
                "a heat-treatment level",
                format!("'{s}'"),
            )),
        }
    }
}

/// The three pasteurization programmes a dairy can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteurizationMethod {
    Instant,
    Fast,
    Long,
}

impl PasteurizationMethod {
    /// Level the milk ends up at.
    pub fn outcome(self) -> HeatTreatment {
        match self {
            PasteurizationMethod::Instant => HeatTreatment::Sterilized,
            PasteurizationMethod::Fast => HeatTreatment::Pasteurized,
            PasteurizationMethod::Long => HeatTreatment::UltraPasteurized,
        }
    }

    pub fn shelf_life_extension(self) -> TimeDelta {
        match self {
            PasteurizationMethod::Instant => TimeDelta::days(5),
            PasteurizationMethod::Fast => TimeDelta::days(7),
            PasteurizationMethod::Long => TimeDelta::days(14),
        }
    }

    /// Processing time, in simulated time units.
    pub fn delay_units(self) -> f64 {
        match self {
            PasteurizationMethod::Instant => 2.0,
            PasteurizationMethod::Fast => 10.0,
            PasteurizationMethod::Long => 20.0,
        }
    }
}

impl fmt::Display for PasteurizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteurizationMethod::Instant => write!(f, "instant"),
            PasteurizationMethod::Fast => write!(f, "fast"),
            PasteurizationMethod::Long => write!(f, "long"),
        }
    }
}

/// A batch of milk: a [`Product`] named "Milk" plus its dairy attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Milk {
    pub product: Product,
    pub heat_treatment: HeatTreatment,
    pub fat_percent: f64,
}

/// Payload for building a [`Milk`] batch.
#[derive(Debug, Clone)]
pub struct MilkCreate {
    pub heat_treatment: HeatTreatment,
    pub fat_percent: f64,
    pub volume: f64,
    pub shelf_life: TimeDelta,
    pub weight: f64,
    pub recommended_temperature: f64,
    pub current_temperature: f64,
}

impl Milk {
    pub const NAME: &'static str = "Milk";

    pub fn new(params: MilkCreate) -> Self {
        let product = Product::new(ProductCreate {
            name: Self::NAME.to_string(),
            shelf_life: params.shelf_life,
            weight: params.weight,
            recommended_temperature: params.recommended_temperature,
            current_temperature: params.current_temperature,
            volume: params.volume,
        });
        Self {
            product,
            heat_treatment: params.heat_treatment,
            fat_percent: params.fat_percent,
        }
    }

    pub fn shelf_life(&self) -> TimeDelta {
        self.product.shelf_life
    }

    /// Applies `method` if the milk has not been heat treated yet.
    ///
    /// Returns `true` when the state changed. Any other starting level makes
    /// this a no-op, which is what keeps a second, overlapping schedule from
    /// extending the shelf life twice. A shelf life that cannot be extended
    /// without overflowing also leaves the milk untouched.
    pub fn apply_pasteurization(&mut self, method: PasteurizationMethod) -> bool {
        if self.heat_treatment != HeatTreatment::NotPasteurized {
            debug!(%method, state = %self.heat_treatment, "Pasteurization skipped");
            return false;
        }

        let Some(shelf_life) = self
            .product
            .shelf_life
            .checked_add(&method.shelf_life_extension())
        else {
            warn!(
                %method,
                shelf_life = %format_duration(self.product.shelf_life),
                "Pasteurization skipped: shelf life out of range"
            );
            return false;
        };

        let from = self.heat_treatment;
        self.heat_treatment = method.outcome();
        self.product.shelf_life = shelf_life;
        info!(
            %method,
            %from,
            to = %self.heat_treatment,
            shelf_life = %format_duration(self.product.shelf_life),
            "Milk pasteurized"
        );
        true
    }
}

impl MilkCreate {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> SupplyResult<Self> {
        let heat_treatment = fields.text("heat_treatment")?.parse()?;
        let product = ProductCreate::from_fields(fields, Milk::NAME.to_string())?;
        Ok(Self {
            heat_treatment,
            fat_percent: fields.number("fat_percent")?,
            volume: product.volume,
            shelf_life: product.shelf_life,
            weight: product.weight,
            recommended_temperature: product.recommended_temperature,
            current_temperature: product.current_temperature,
        })
    }
}

impl TryFrom<&Value> for MilkCreate {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        let fields = Fields::new(value, "milk")?;
        Self::from_fields(&fields)
    }
}

impl TryFrom<&Value> for Milk {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        MilkCreate::try_from(value).map(Milk::new)
    }
}

impl fmt::Display for Milk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.product)?;
        writeln!(f, "Heat treatment: {}", self.heat_treatment)?;
        writeln!(f, "Product volume: {}", self.product.volume)?;
        write!(f, "Fat: {}%", self.fat_percent)
    }
}
