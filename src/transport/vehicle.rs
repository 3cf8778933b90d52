//! # Transport
//!
//! A vehicle with a weight and volume budget and an ordered manifest.
//!
//! ## Capacity accounting
//!
//! ```text
//!   load([a, b, c])                       unload()
//!   ───────────────                       ────────
//!   running = a          fits? ─┐         for each item in manifest:
//!   running = a + b      fits? ─┤  no ──▶ return false, nothing changes
//!   running = a + b + c  fits? ─┘             free += item
//!   free -= running                       manifest cleared
//!   manifest += [a, b, c]
//!   return true
//! ```
//!
//! Every item that fits costs one time unit of handling, also on an attempt
//! that is rejected later in the scan. State is only written once the whole
//! batch has been accepted, so dropping a `load` future halfway leaves the
//! transport untouched.

use crate::error::{SupplyError, SupplyResult};
use crate::model::fields::Fields;
use crate::model::{into_cargo, Article, Goods};
use crate::transport::class::TruckClass;
use crate::transport::pace::Pace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info};

/// Payload for building a [`Transport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportCreate {
    pub speed: f64,
    /// Cargo hold volume.
    pub volume: f64,
    /// Maximum cargo weight.
    pub weight: f64,
    /// Temperature inside the cargo hold.
    pub temperature: f64,
}

impl TransportCreate {
    /// A truck of the given class, carrying its default payload.
    pub fn for_class(class: TruckClass, speed: f64, volume: f64, temperature: f64) -> Self {
        Self {
            speed,
            volume,
            weight: class.payload_kg(),
            temperature,
        }
    }
}

impl TryFrom<&Value> for TransportCreate {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        let fields = Fields::new(value, "transport")?;
        Ok(Self {
            speed: fields.number("speed")?,
            volume: fields.number("volume")?,
            weight: fields.number("weight")?,
            temperature: fields.number("temperature")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Transport {
    speed: f64,
    free_volume: f64,
    free_weight: f64,
    temperature: f64,
    manifest: Vec<Arc<dyn Goods>>,
    pace: Pace,
}

impl Transport {
    /// Builds an empty transport. Fails when `speed` is not strictly positive.
    pub fn new(params: TransportCreate) -> SupplyResult<Self> {
        if !(params.speed > 0.0) {
            return Err(SupplyError::NonPositiveSpeed(params.speed));
        }
        Ok(Self {
            speed: params.speed,
            free_volume: params.volume,
            free_weight: params.weight,
            temperature: params.temperature,
            manifest: Vec::new(),
            pace: Pace::default(),
        })
    }

    pub fn set_pace(&mut self, pace: Pace) {
        self.pace = pace;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn free_volume(&self) -> f64 {
        self.free_volume
    }

    pub fn free_weight(&self) -> f64 {
        self.free_weight
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Goods currently on board, in loading order.
    pub fn manifest(&self) -> &[Arc<dyn Goods>] {
        &self.manifest
    }

    /// Loads the whole batch or nothing.
    ///
    /// Returns `false` as soon as a prefix of `goods` exceeds the free weight
    /// or the free volume.
    pub async fn load(&mut self, goods: Vec<Arc<dyn Goods>>) -> bool {
        let mut total_weight = 0.0;
        let mut total_volume = 0.0;

        for (index, item) in goods.iter().enumerate() {
            total_weight += item.weight();
            total_volume += item.volume();
            if total_weight > self.free_weight || total_volume > self.free_volume {
                info!(
                    items = goods.len(),
                    rejected_at = index,
                    total_weight,
                    total_volume,
                    free_weight = self.free_weight,
                    free_volume = self.free_volume,
                    "Load rejected"
                );
                return false;
            }
            debug!(index, weight = item.weight(), volume = item.volume(), "Item fits");
            sleep(self.pace.item_handling()).await;
        }

        self.free_weight -= total_weight;
        self.free_volume -= total_volume;
        let count = goods.len();
        self.manifest.extend(goods);
        info!(
            items = count,
            on_board = self.manifest.len(),
            free_weight = self.free_weight,
            free_volume = self.free_volume,
            "Load accepted"
        );
        true
    }

    /// Loads a loosely-typed batch. Every article must be a product of some
    /// kind; otherwise nothing is loaded and a type mismatch is returned.
    pub async fn load_articles(&mut self, articles: Vec<Article>) -> SupplyResult<bool> {
        let goods = into_cargo(articles)?;
        Ok(self.load(goods).await)
    }

    /// Travels `distance`, taking `distance / speed` time units.
    pub async fn transportation(&self, distance: f64) -> SupplyResult<()> {
        let travel = self.pace.travel(distance, self.speed)?;
        debug!(distance, speed = self.speed, ?travel, "Travelling");
        sleep(travel).await;
        info!(distance, "Arrived");
        Ok(())
    }

    /// Takes every item off, restoring its weight and volume, and returns the
    /// unloaded goods in manifest order. The manifest is empty afterwards, so a
    /// second call restores nothing.
    pub async fn unload(&mut self) -> Vec<Arc<dyn Goods>> {
        let mut free_weight = self.free_weight;
        let mut free_volume = self.free_volume;
        for item in &self.manifest {
            free_weight += item.weight();
            free_volume += item.volume();
            sleep(self.pace.item_handling()).await;
        }

        self.free_weight = free_weight;
        self.free_volume = free_volume;
        let cargo = std::mem::take(&mut self.manifest);
        info!(
            items = cargo.len(),
            free_weight = self.free_weight,
            free_volume = self.free_volume,
            "Unloaded"
        );
        cargo
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Speed: {}", self.speed)?;
        writeln!(f, "Free volume: {}", self.free_volume)?;
        writeln!(f, "Free weight: {}", self.free_weight)?;
        writeln!(f, "Temperature: {}", self.temperature)?;
        write!(f, "Cargo: {} item(s)", self.manifest.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        HeatTreatment, MilkCreate, PackCreate, PackedMilk, PackedMilkCreate, Product, ProductCreate,
    };
    use chrono::TimeDelta;
    use std::time::Duration;
    use tokio::time::Instant;

    fn car() -> Transport {
        Transport::new(TransportCreate {
            speed: 10.0,
            volume: 50.0,
            weight: 100.0,
            temperature: 36.6,
        })
        .unwrap()
    }

    fn bottle() -> Arc<dyn Goods> {
        Arc::new(PackedMilk::new(PackedMilkCreate {
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
                material: "glass".into(),
                tightness: true,
                volume: 2.0,
                shelf_life: TimeDelta::days(3),
            },
        }))
    }

    fn crate_of(name: &str, weight: f64, volume: f64) -> Arc<dyn Goods> {
        Arc::new(Product::new(ProductCreate {
            name: name.into(),
            shelf_life: TimeDelta::days(1),
            weight,
            recommended_temperature: 4.0,
            current_temperature: 4.0,
            volume,
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_five_bottles() {
        let mut transport = car();
        let goods: Vec<_> = (0..5).map(|_| bottle()).collect();

        assert!(transport.load(goods).await);
        assert_eq!(transport.free_weight(), 96.0);
        assert_eq!(transport.free_volume(), 40.0);
        assert_eq!(transport.manifest().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overweight_batch_changes_nothing() {
        let mut transport = car();
        let batch = vec![
            crate_of("flour", 60.0, 1.0),
            crate_of("sugar", 30.0, 1.0),
            crate_of("salt", 20.0, 1.0),
            crate_of("pepper", 0.1, 1.0),
        ];

        assert!(!transport.load(batch).await);
        assert_eq!(transport.free_weight(), 100.0);
        assert_eq!(transport.free_volume(), 50.0);
        assert!(transport.manifest().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overvolume_batch_is_rejected() {
        let mut transport = car();
        assert!(!transport.load(vec![crate_of("hay", 1.0, 51.0)]).await);
        assert_eq!(transport.free_volume(), 50.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_is_checked_against_current_free_space() {
        let mut transport = car();
        assert!(transport.load(vec![crate_of("a", 70.0, 10.0)]).await);
        assert!(!transport.load(vec![crate_of("b", 40.0, 10.0)]).await);
        assert!(transport.load(vec![crate_of("c", 30.0, 10.0)]).await);
        assert_eq!(transport.free_weight(), 0.0);
        assert_eq!(transport.manifest().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_load_succeeds() {
        let mut transport = car();
        assert!(transport.load(Vec::new()).await);
        assert_eq!(transport.free_weight(), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_attempt_still_costs_handling_time() {
        let mut transport = car();
        let batch = vec![
            crate_of("a", 40.0, 1.0),
            crate_of("b", 40.0, 1.0),
            crate_of("c", 40.0, 1.0),
        ];

        let start = Instant::now();
        assert!(!transport.load(batch).await);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unload_restores_capacity_once() {
        let mut transport = car();
        let goods: Vec<_> = (0..5).map(|_| bottle()).collect();
        assert!(transport.load(goods).await);

        let unloaded = transport.unload().await;
        assert_eq!(unloaded.len(), 5);
        assert!((transport.free_weight() - 100.0).abs() < 1e-9);
        assert!((transport.free_volume() - 50.0).abs() < 1e-9);
        assert!(transport.manifest().is_empty());

        assert!(transport.unload().await.is_empty());
        assert!((transport.free_weight() - 100.0).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manifest_shares_goods() {
        let mut transport = car();
        let item = bottle();
        assert!(transport.load(vec![item.clone()]).await);
        assert!(Arc::ptr_eq(&transport.manifest()[0], &item));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transportation_waits_distance_over_speed() {
        let transport = car();
        let start = Instant::now();
        transport.transportation(20.0).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_transportation_rejects_negative_distance() {
        let transport = car();
        assert_eq!(
            transport.transportation(-5.0).await,
            Err(SupplyError::InvalidDistance(-5.0))
        );
    }

    #[tokio::test]
    async fn test_endless_trip_is_not_a_zero_wait() {
        let snail = Transport::new(TransportCreate {
            speed: 1e-300,
            volume: 1.0,
            weight: 1.0,
            temperature: 1.0,
        })
        .unwrap();
        assert!(matches!(
            snail.transportation(1.0).await,
            Err(SupplyError::DelayOutOfRange(_))
        ));
    }

    #[test]
    fn test_zero_speed_rejected_at_construction() {
        let result = Transport::new(TransportCreate {
            speed: 0.0,
            volume: 1.0,
            weight: 1.0,
            temperature: 1.0,
        });
        assert!(matches!(result, Err(SupplyError::NonPositiveSpeed(_))));
    }

    #[test]
    fn test_transport_from_json_rejects_text_speed() {
        let payload = serde_json::json!({
            "speed": "fast", "volume": 50, "weight": 100, "temperature": 36.6
        });
        match TransportCreate::try_from(&payload) {
            Err(SupplyError::TypeMismatch { field, .. }) => assert_eq!(field, "speed"),
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_truck_class_preset() {
        let params = TransportCreate::for_class(TruckClass::Truck5, 80.0, 30.0, 4.0);
        let truck = Transport::new(params).unwrap();
        assert_eq!(truck.free_weight(), 5000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_display_summary() {
        let mut transport = car();
        assert!(transport.load(vec![bottle()]).await);
        let text = transport.to_string();
        assert!(text.contains("Max Speed: 10"));
        assert!(text.contains("Temperature: 36.6"));
        assert!(text.ends_with("Cargo: 1 item(s)"));
    }
}
