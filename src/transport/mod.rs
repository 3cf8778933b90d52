//! Vehicles, their capacity accounting, and simulated time.

pub mod class;
pub mod pace;
pub mod vehicle;

pub use class::TruckClass;
pub use pace::Pace;
pub use vehicle::{Transport, TransportCreate};
