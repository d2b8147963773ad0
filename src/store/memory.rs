//! In-memory car store
//!
//! Records are kept in insertion order. Ids are generated object ids, so a
//! `memory://` deployment accepts exactly the ids a MongoDB one would.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::model::{Car, CarUpdate, NewCar};

use super::errors::{StoreError, StoreResult};
use super::{parse_object_id, CarStore};

/// In-process store.
///
/// The lock is only held for the map operation itself, never across an
/// await point.
#[derive(Debug, Default)]
pub struct MemoryCarStore {
    cars: RwLock<Vec<Car>>,
}

impl MemoryCarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn create(&self, car: NewCar) -> StoreResult<Car> {
        let car = car.into_car(ObjectId::new().to_hex());
        let mut cars = self.cars.write().map_err(|_| StoreError::Poisoned)?;
        cars.push(car.clone());
        Ok(car)
    }

    async fn list_all(&self) -> StoreResult<Vec<Car>> {
        let cars = self.cars.read().map_err(|_| StoreError::Poisoned)?;
        Ok(cars.clone())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Car>> {
        let oid = parse_object_id(id)?.to_hex();
        let cars = self.cars.read().map_err(|_| StoreError::Poisoned)?;
        Ok(cars.iter().find(|car| car.id == oid).cloned())
    }

    async fn update_by_id(&self, id: &str, update: CarUpdate) -> StoreResult<Option<Car>> {
        let oid = parse_object_id(id)?.to_hex();
        let mut cars = self.cars.write().map_err(|_| StoreError::Poisoned)?;

        Ok(cars.iter_mut().find(|car| car.id == oid).map(|car| {
            update.apply_to(car);
            car.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Car>> {
        let oid = parse_object_id(id)?.to_hex();
        let mut cars = self.cars.write().map_err(|_| StoreError::Poisoned)?;

        Ok(cars
            .iter()
            .position(|car| car.id == oid)
            .map(|index| cars.remove(index)))
    }
}
