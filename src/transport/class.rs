use serde::{Deserialize, Serialize};
use std::fmt;

/// Truck presets, named after their payload in tonnes.
///
/// A class only supplies the default payload capacity; every truck is an
/// ordinary [`Transport`](crate::transport::Transport) once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckClass {
    Truck3,
    Truck5,
    Truck10,
    Truck20,
    Truck50,
    Truck55,
}

impl TruckClass {
    pub const ALL: [TruckClass; 6] = [
        TruckClass::Truck3,
        TruckClass::Truck5,
        TruckClass::Truck10,
        TruckClass::Truck20,
        TruckClass::Truck50,
        TruckClass::Truck55,
    ];

    pub fn payload_tonnes(self) -> u32 {
        match self {
            TruckClass::Truck3 => 3,
            TruckClass::Truck5 => 5,
            TruckClass::Truck10 => 10,
            TruckClass::Truck20 => 20,
            TruckClass::Truck50 => 50,
            TruckClass::Truck55 => 55,
        }
    }

    /// Default weight capacity in kilograms.
    pub fn payload_kg(self) -> f64 {
        f64::from(self.payload_tonnes()) * 1000.0
    }
}

impl fmt::Display for TruckClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Truck{}", self.payload_tonnes())
    }
}
