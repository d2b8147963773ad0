//! MongoDB car store
//!
//! One collection, one document per car, sensors embedded. Writes go through
//! the driver as-is; ordering and isolation are whatever the server gives.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::model::{Car, CarUpdate, NewCar, Sensor};

use super::errors::StoreResult;
use super::{parse_object_id, CarStore};

/// Stored shape of a car. Unknown keys (`__v`, sensor `_id`s written by
/// other clients) are ignored on read.
#[derive(Debug, Serialize, Deserialize)]
struct CarDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    model: String,
    year: Number,
    #[serde(default)]
    sensors: Vec<Sensor>,
}

impl From<CarDocument> for Car {
    fn from(doc: CarDocument) -> Self {
        Car {
            id: doc.id.to_hex(),
            model: doc.model,
            year: doc.year,
            sensors: doc.sensors,
        }
    }
}

/// Store backed by a MongoDB collection
#[derive(Debug, Clone)]
pub struct MongoCarStore {
    cars: Collection<CarDocument>,
}

impl MongoCarStore {
    /// Connect to `uri` and verify the deployment answers a `ping`.
    ///
    /// Fails if the URI is invalid or the server is unreachable.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        Ok(Self::from_client(&client, database, collection))
    }

    /// Wrap an already-connected client
    pub fn from_client(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            cars: client.database(database).collection(collection),
        }
    }

    /// Delete every car. Test fixtures only.
    pub async fn clear(&self) -> StoreResult<u64> {
        let result = self.cars.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }
}

/// `$set` document for the fields present in `update`
fn set_document(update: &CarUpdate) -> StoreResult<Document> {
    let mut set = Document::new();
    if let Some(model) = &update.model {
        set.insert("model", model.as_str());
    }
    if let Some(year) = &update.year {
        set.insert("year", bson::to_bson(year)?);
    }
    if let Some(sensors) = &update.sensors {
        set.insert("sensors", bson::to_bson(sensors)?);
    }
    Ok(set)
}

#[async_trait]
impl CarStore for MongoCarStore {
    async fn create(&self, car: NewCar) -> StoreResult<Car> {
        let document = CarDocument {
            id: ObjectId::new(),
            model: car.model,
            year: car.year,
            sensors: car.sensors,
        };
        self.cars.insert_one(&document, None).await?;
        Ok(document.into())
    }

    async fn list_all(&self) -> StoreResult<Vec<Car>> {
        let cursor = self.cars.find(None, None).await?;
        let documents: Vec<CarDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Car::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Car>> {
        let oid = parse_object_id(id)?;
        let found = self.cars.find_one(doc! { "_id": oid }, None).await?;
        Ok(found.map(Car::from))
    }

    async fn update_by_id(&self, id: &str, update: CarUpdate) -> StoreResult<Option<Car>> {
        let oid = parse_object_id(id)?;

        // An empty $set is rejected by the server
        if update.is_empty() {
            return self.get_by_id(id).await;
        }
        let set = set_document(&update)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .cars
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set }, options)
            .await?;
        Ok(updated.map(Car::from))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<Car>> {
        let oid = parse_object_id(id)?;
        let removed = self
            .cars
            .find_one_and_delete(doc! { "_id": oid }, None)
            .await?;
        Ok(removed.map(Car::from))
    }
}
