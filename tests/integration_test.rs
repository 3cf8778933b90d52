use chrono::TimeDelta;
use cold_chain::clients::{ActorClient, DairyClient};
use cold_chain::dairy_actor::{self, DairyError, MilkId};
use cold_chain::error::SupplyError;
use cold_chain::fleet_actor::{FleetError, TransportId};
use cold_chain::lifecycle::{SimulationConfig, SupplySystem};
use cold_chain::model::{
    articles_from_json, Goods, HeatTreatment, MilkCreate, PackCreate, PackedMilk,
    PackedMilkCreate,
};
use cold_chain::transport::{Pace, TransportCreate, TruckClass};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};

const UNIT: Duration = Duration::from_millis(100);

fn system() -> SupplySystem {
    SupplySystem::new(&SimulationConfig {
        time_unit_ms: 100,
        registry_buffer: 16,
    })
}

fn raw_milk() -> MilkCreate {
    MilkCreate {
        heat_treatment: HeatTreatment::NotPasteurized,
        fat_percent: 20.0,
        volume: 2.0,
        shelf_life: TimeDelta::days(5),
        weight: 0.8,
        recommended_temperature: 3.0,
        current_temperature: 2.0,
    }
}

fn bottle() -> PackedMilkCreate {
    PackedMilkCreate {
        milk: raw_milk(),
        pack: PackCreate {
            material: "glass".into(),
            tightness: true,
            volume: 2.0,
            shelf_life: TimeDelta::days(3),
        },
    }
}

fn bottles(n: usize) -> Vec<Arc<dyn Goods>> {
    (0..n)
        .map(|_| Arc::new(PackedMilk::new(bottle())) as Arc<dyn Goods>)
        .collect()
}

fn car() -> TransportCreate {
    TransportCreate {
        speed: 10.0,
        volume: 50.0,
        weight: 100.0,
        temperature: 36.6,
    }
}

#[tokio::test(start_paused = true)]
async fn test_instant_pasteurization_sterilizes_once() {
    let system = system();
    let batch = system.dairy.register_milk(raw_milk()).await.unwrap();

    let ready_in = system.dairy.instant_pasteurization(batch).await.unwrap();
    assert_eq!(ready_in, UNIT * 2);

    // Nothing changes while the programme runs.
    sleep(UNIT).await;
    let milk = system.dairy.get(batch).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::NotPasteurized);

    sleep(UNIT + Duration::from_millis(1)).await;
    let milk = system.dairy.get(batch).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::Sterilized);
    assert_eq!(milk.shelf_life(), TimeDelta::days(10));

    // A second programme runs but finds the milk already treated.
    let ready_in = system.dairy.long_pasteurization(batch).await.unwrap();
    sleep(ready_in + Duration::from_millis(1)).await;
    let milk = system.dairy.get(batch).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::Sterilized);
    assert_eq!(milk.shelf_life(), TimeDelta::days(10));

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_programmes_first_to_finish_wins() {
    let system = system();
    let batch = system.dairy.register_milk(raw_milk()).await.unwrap();

    system.dairy.fast_pasteurization(batch).await.unwrap();
    system.dairy.instant_pasteurization(batch).await.unwrap();

    sleep(UNIT * 30).await;
    let milk = system.dairy.get(batch).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::Sterilized);
    assert_eq!(milk.shelf_life(), TimeDelta::days(10));

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_each_method_reaches_its_level() {
    let system = system();
    let cases = [
        (HeatTreatment::Pasteurized, 12, UNIT * 10),
        (HeatTreatment::UltraPasteurized, 19, UNIT * 20),
    ];

    for (expected, days, delay) in cases {
        let batch = system.dairy.register_milk(raw_milk()).await.unwrap();
        let ready_in = match expected {
            HeatTreatment::Pasteurized => system.dairy.fast_pasteurization(batch).await,
            _ => system.dairy.long_pasteurization(batch).await,
        }
        .unwrap();
        assert_eq!(ready_in, delay);

        sleep(ready_in + Duration::from_millis(1)).await;
        let milk = system.dairy.get(batch).await.unwrap().unwrap();
        assert_eq!(milk.heat_treatment, expected);
        assert_eq!(milk.shelf_life(), TimeDelta::days(days));
    }

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_waits_for_running_programme() {
    let system = system();
    let batch = system.dairy.register_milk(raw_milk()).await.unwrap();
    system.dairy.long_pasteurization(batch).await.unwrap();

    let start = Instant::now();
    system.shutdown().await;
    assert!(start.elapsed() >= UNIT * 20);
}

#[tokio::test(start_paused = true)]
async fn test_out_of_range_shelf_life_is_left_alone() {
    let system = system();
    let normal = system.dairy.register_milk(raw_milk()).await.unwrap();
    let ancient = system
        .dairy
        .register_milk(MilkCreate {
            shelf_life: TimeDelta::MAX,
            ..raw_milk()
        })
        .await
        .unwrap();

    let ready_in = system.dairy.instant_pasteurization(ancient).await.unwrap();
    sleep(ready_in + Duration::from_millis(1)).await;

    let milk = system.dairy.get(ancient).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::NotPasteurized);
    assert_eq!(milk.shelf_life(), TimeDelta::MAX);

    // The registry survives and keeps serving other batches.
    let milk = system.dairy.get(normal).await.unwrap().unwrap();
    assert_eq!(milk.shelf_life(), TimeDelta::days(5));
    let ready_in = system.dairy.fast_pasteurization(normal).await.unwrap();
    sleep(ready_in + Duration::from_millis(1)).await;
    let milk = system.dairy.get(normal).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::Pasteurized);

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_packed_bottle_is_sterilized_in_its_pack() {
    let system = system();
    let batch = system.dairy.register_packed_milk(bottle()).await.unwrap();

    let ready_in = system
        .dairy
        .instant_pasteurization_packed(batch)
        .await
        .unwrap();
    assert_eq!(ready_in, UNIT * 2);

    sleep(UNIT).await;
    let packed = system.dairy.get_packed(batch).await.unwrap().unwrap();
    assert_eq!(packed.milk.heat_treatment, HeatTreatment::NotPasteurized);

    sleep(UNIT + Duration::from_millis(1)).await;
    let packed = system.dairy.get_packed(batch).await.unwrap().unwrap();
    assert_eq!(packed.milk.heat_treatment, HeatTreatment::Sterilized);
    assert_eq!(packed.milk.shelf_life(), TimeDelta::days(10));
    assert_eq!(packed.pack.material, "glass");

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_packed_overlapping_programmes_first_to_finish_wins() {
    let system = system();
    let batch = system
        .dairy
        .register_packed_milk_json(&json!({
            "heat_treatment": "Not pasteurized",
            "fat_percent": 3.2,
            "product_volume": 1,
            "product_shelf_life": { "days": 5 },
            "weight": 1,
            "recommended_temperature": 4,
            "current_temperature": 6,
            "material": "carton",
            "tightness": true,
            "pack_volume": 1,
            "pack_shelf_life": { "days": 30 }
        }))
        .await
        .unwrap();

    system.dairy.long_pasteurization_packed(batch).await.unwrap();
    system.dairy.fast_pasteurization_packed(batch).await.unwrap();

    sleep(UNIT * 30).await;
    let packed = system.dairy.get_packed(batch).await.unwrap().unwrap();
    assert_eq!(packed.milk.heat_treatment, HeatTreatment::Pasteurized);
    assert_eq!(packed.milk.shelf_life(), TimeDelta::days(12));

    // Loose and packed batches are numbered independently.
    let loose = system.dairy.register_milk(raw_milk()).await.unwrap();
    assert_eq!(loose, MilkId(1));

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_dairy_rejects_delays_it_cannot_represent() {
    let (registry, client) = dairy_actor::new(8);
    let (packed_registry, packed_client) = dairy_actor::new_packed(8);
    tokio::spawn(registry.run(Pace::new(Duration::MAX)));
    tokio::spawn(packed_registry.run(Pace::new(Duration::MAX)));
    let dairy = DairyClient::new(client, packed_client);

    let batch = dairy.register_milk(raw_milk()).await.unwrap();
    let result = dairy.instant_pasteurization(batch).await;
    assert_eq!(
        result,
        Err(DairyError::Supply(SupplyError::DelayOutOfRange(2.0)))
    );
    let milk = dairy.get(batch).await.unwrap().unwrap();
    assert_eq!(milk.heat_treatment, HeatTreatment::NotPasteurized);
}

#[tokio::test]
async fn test_unknown_batch() {
    let system = system();
    let result = system.dairy.instant_pasteurization(MilkId(42)).await;
    assert_eq!(result, Err(DairyError::NotFound("milk_42".into())));
    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_load_travel_unload() {
    let system = system();
    let transport = system.fleet.register_transport(car()).await.unwrap();

    let start = Instant::now();
    assert!(system.fleet.load(transport, bottles(5)).await.unwrap());
    assert_eq!(start.elapsed(), UNIT * 5);

    let loaded = system.fleet.get(transport).await.unwrap().unwrap();
    assert_eq!(loaded.free_weight(), 96.0);
    assert_eq!(loaded.free_volume(), 40.0);
    assert_eq!(loaded.manifest().len(), 5);

    let start = Instant::now();
    system.fleet.transportation(transport, 20.0).await.unwrap();
    assert_eq!(start.elapsed(), UNIT * 2);

    let unloaded = system.fleet.unload(transport).await.unwrap();
    assert_eq!(unloaded.len(), 5);
    let empty = system.fleet.get(transport).await.unwrap().unwrap();
    assert!((empty.free_weight() - 100.0).abs() < 1e-9);
    assert!((empty.free_volume() - 50.0).abs() < 1e-9);
    assert!(empty.manifest().is_empty());

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_overweight_load_leaves_transport_untouched() {
    let system = system();
    let transport = system.fleet.register_transport(car()).await.unwrap();

    assert!(!system.fleet.load(transport, bottles(126)).await.unwrap());

    let state = system.fleet.get(transport).await.unwrap().unwrap();
    assert_eq!(state.free_weight(), 100.0);
    assert_eq!(state.free_volume(), 50.0);
    assert!(state.manifest().is_empty());

    system.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_articles_from_json() {
    let system = system();
    let truck = system
        .fleet
        .register_truck(TruckClass::Truck3, 60.0, 10.0, 4.0)
        .await
        .unwrap();

    let plan = json!([
        {
            "kind": "milk",
            "heat_treatment": "pasteurized",
            "fat_percent": 2.5,
            "product_volume": 1,
            "product_shelf_life": { "days": 7 },
            "weight": 1.03,
            "recommended_temperature": 4,
            "current_temperature": 4
        },
        {
            "kind": "pack",
            "material": "carton",
            "tightness": true,
            "pack_volume": 1,
            "pack_shelf_life": { "days": 30 }
        }
    ]);
    let articles = articles_from_json(&plan).unwrap();

    let result = system.fleet.load_articles(truck, articles.clone()).await;
    assert!(matches!(
        result,
        Err(FleetError::Supply(SupplyError::TypeMismatch { .. }))
    ));

    let milk_only = articles.into_iter().take(1).collect();
    assert!(system.fleet.load_articles(truck, milk_only).await.unwrap());
    let state = system.fleet.get(truck).await.unwrap().unwrap();
    assert_eq!(state.free_weight(), 3000.0 - 1.03);

    system.shutdown().await;
}

#[tokio::test]
async fn test_invalid_transport_and_distance() {
    let system = system();

    let mut stopped = car();
    stopped.speed = 0.0;
    let result = system.fleet.register_transport(stopped).await;
    assert_eq!(
        result,
        Err(FleetError::Supply(SupplyError::NonPositiveSpeed(0.0)))
    );

    let transport = system.fleet.register_transport(car()).await.unwrap();
    let result = system.fleet.transportation(transport, -1.0).await;
    assert_eq!(
        result,
        Err(FleetError::Supply(SupplyError::InvalidDistance(-1.0)))
    );

    let result = system.fleet.unload(TransportId(99)).await;
    assert!(matches!(result, Err(FleetError::NotFound(_))));

    system.shutdown().await;
}
