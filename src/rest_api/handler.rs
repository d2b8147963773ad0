//! # Car Controller
//!
//! Runs each request through its stages:
//!
//! ```text
//! RECEIVED -> VALIDATING -> { REJECTED | PERSISTING }
//!          -> { OK | NOT_FOUND | ERROR }
//! ```
//!
//! Validation failures short-circuit before the store is touched. Absent
//! records become `ApiError::NotFound`; every other store failure becomes
//! `ApiError::Store`. The controller keeps no state between requests.

use std::sync::Arc;

use serde_json::Value;

use crate::model::Car;
use crate::store::CarStore;
use crate::validation::{parse_car_update, parse_new_car};

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

/// Orchestrates validation and persistence for the car resource
#[derive(Clone)]
pub struct CarController {
    store: Arc<dyn CarStore>,
}

impl CarController {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a new car
    pub async fn create(&self, payload: &Value) -> ApiResult<Car> {
        let car = parse_new_car(payload)?;
        let created = self.store.create(car).await?;
        tracing::info!(id = %created.id, model = %created.model, "car created");
        Ok(created)
    }

    /// Every car; empty when nothing is stored
    pub async fn list(&self) -> ApiResult<Vec<Car>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: &str) -> ApiResult<Car> {
        self.store.get_by_id(id).await?.ok_or(ApiError::NotFound)
    }

    /// Validate and apply a partial update
    pub async fn update(&self, id: &str, payload: &Value) -> ApiResult<Car> {
        let update = parse_car_update(payload)?;
        let updated = self
            .store
            .update_by_id(id, update)
            .await?
            .ok_or(ApiError::NotFound)?;
        tracing::info!(id = %updated.id, "car updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        let removed = self
            .store
            .delete_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        tracing::info!(id = %removed.id, "car deleted");
        Ok(MessageResponse::deleted())
    }
}
