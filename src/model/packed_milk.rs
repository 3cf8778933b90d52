use crate::error::{SupplyError, SupplyResult};
use crate::model::fields::Fields;
use crate::model::milk::{Milk, MilkCreate, PasteurizationMethod};
use crate::model::pack::{Pack, PackCreate};
use serde_json::Value;
use std::fmt;

/// Milk sold in a pack.
///
/// Composition of two independently built components. There is no invariant
/// tying them together: a 2 liter batch may sit in a 0.5 liter pack.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedMilk {
    pub milk: Milk,
    pub pack: Pack,
}

/// Payload for building a [`PackedMilk`].
#[derive(Debug, Clone)]
pub struct PackedMilkCreate {
    pub milk: MilkCreate,
    pub pack: PackCreate,
}

impl PackedMilk {
    pub fn new(params: PackedMilkCreate) -> Self {
        Self {
            milk: Milk::new(params.milk),
            pack: Pack::new(params.pack),
        }
    }

    pub fn apply_pasteurization(&mut self, method: PasteurizationMethod) -> bool {
        self.milk.apply_pasteurization(method)
    }
}

/// A packed milk payload is one flat object carrying both the milk and the
/// pack fields.
impl TryFrom<&Value> for PackedMilkCreate {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        let fields = Fields::new(value, "packed milk")?;
        let milk = MilkCreate::from_fields(&fields)?;
        let pack = PackCreate::try_from(value)?;
        Ok(Self { milk, pack })
    }
}

impl TryFrom<&Value> for PackedMilk {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        PackedMilkCreate::try_from(value).map(PackedMilk::new)
    }
}

impl fmt::Display for PackedMilk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.milk)?;
        write!(f, "{}", self.pack)
    }
}
