//! # Persistence Gateway
//!
//! The only component allowed to perform store I/O. Every operation is a
//! single pass-through to the document store.
//!
//! Two backends:
//! - [`MongoCarStore`] - MongoDB collection via the official driver
//! - [`MemoryCarStore`] - in-process store for tests and `memory://` runs
//!
//! Input is trusted: payloads are validated before they get here.

mod errors;
mod memory;
mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::model::{Car, CarUpdate, NewCar};

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryCarStore;
pub use mongo::MongoCarStore;

/// Car persistence operations.
///
/// Lookups by id return `Ok(None)` when nothing matches. A malformed id is
/// `StoreError::InvalidId`, not an absent result.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Insert a new record and return it with its assigned id
    async fn create(&self, car: NewCar) -> StoreResult<Car>;

    /// Every record in the store, unfiltered
    async fn list_all(&self) -> StoreResult<Vec<Car>>;

    /// Fetch one record
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Car>>;

    /// Apply the present fields and return the record as it is afterwards
    async fn update_by_id(&self, id: &str, update: CarUpdate) -> StoreResult<Option<Car>>;

    /// Remove a record, returning what was removed
    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Car>>;
}

/// Parse a client-supplied id into an object id
pub(crate) fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("60d21b9667d0d8992e610c85").is_ok());
        assert!(matches!(
            parse_object_id("123"),
            Err(StoreError::InvalidId(id)) if id == "123"
        ));
        assert!(parse_object_id("zzd21b9667d0d8992e610c85").is_err());
    }
}
