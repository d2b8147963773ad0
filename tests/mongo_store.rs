//! MongoDB Store Tests
//!
//! Runs the gateway against a live deployment. Ignored by default; run with
//! `MONGODB_URI` set and `cargo test -- --ignored`.

use car_sensors_api::model::{CarUpdate, NewCar, Sensor};
use car_sensors_api::store::{CarStore, MongoCarStore, StoreError};
use serde_json::Number;

const ABSENT_ID: &str = "60d21b9667d0d8992e610c85";

async fn connect(collection: &str) -> MongoCarStore {
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let store = MongoCarStore::connect(&uri, "car_sensors_test", collection)
        .await
        .unwrap();
    store.clear().await.unwrap();
    store
}

fn new_car(model: &str) -> NewCar {
    NewCar {
        model: model.to_string(),
        year: Number::from(2020),
        sensors: vec![Sensor::new("Speed", 100), Sensor::new("Fuel", 40)],
    }
}

#[tokio::test]
#[ignore = "requires a MongoDB deployment"]
async fn test_crud_round_trip() {
    let store = connect("cars_crud").await;

    let created = store.create(new_car("Model 3")).await.unwrap();
    assert_eq!(created.id.len(), 24);

    let fetched = store.get_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let update = CarUpdate {
        year: Some(Number::from(2022)),
        ..Default::default()
    };
    let updated = store.update_by_id(&created.id, update).await.unwrap().unwrap();
    assert_eq!(updated.year, Number::from(2022));
    assert_eq!(updated.model, "Model 3");
    assert_eq!(updated.sensors, created.sensors);

    let removed = store.delete_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(removed.id, created.id);
    assert!(store.get_by_id(&created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a MongoDB deployment"]
async fn test_list_and_absent_ids() {
    let store = connect("cars_list").await;
    assert!(store.list_all().await.unwrap().is_empty());

    store.create(new_car("Ioniq")).await.unwrap();
    store.create(new_car("Kona")).await.unwrap();
    assert_eq!(store.list_all().await.unwrap().len(), 2);

    assert!(store.get_by_id(ABSENT_ID).await.unwrap().is_none());
    assert!(store
        .update_by_id(ABSENT_ID, CarUpdate::default())
        .await
        .unwrap()
        .is_none());
    assert!(store.delete_by_id(ABSENT_ID).await.unwrap().is_none());
    assert!(matches!(
        store.get_by_id("123").await,
        Err(StoreError::InvalidId(_))
    ));
}

#[tokio::test]
#[ignore = "requires a MongoDB deployment"]
async fn test_empty_update_returns_current_record() {
    let store = connect("cars_empty_update").await;

    let created = store.create(new_car("Niro")).await.unwrap();
    let unchanged = store
        .update_by_id(&created.id, CarUpdate::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, created);
}
