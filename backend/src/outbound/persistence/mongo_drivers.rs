//! MongoDB adapter for the driver store port.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, Document, doc};

use crate::domain::ports::{DriverStore, StoreError};
use crate::domain::{DriverSeed, DriverStatus, RecordId};

use super::{DRIVERS, DocumentStore, backend_error, object_id, record_id};

/// Driver collection adapter.
#[derive(Debug, Clone)]
pub struct MongoDriverStore {
    drivers: Collection<Document>,
}

impl MongoDriverStore {
    /// Bind the adapter to the store's driver collection.
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            drivers: store.collection(DRIVERS),
        }
    }

    /// Insert a seed driver record. Used by the seeding utility only; the
    /// HTTP surface never creates drivers.
    pub async fn insert_seed(&self, seed: &DriverSeed) -> Result<RecordId, StoreError> {
        let inserted = self
            .drivers
            .insert_one(doc! {
                "name": &seed.name,
                "vehicleType": &seed.vehicle_type,
                "isAvailable": seed.is_available,
                "rating": seed.rating,
            })
            .await
            .map_err(backend_error)?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::malformed("insert acknowledged without an object id"))?;
        record_id(id)
    }

    /// Names of available drivers rated at or above the given floor.
    pub async fn available_names(&self, min_rating: f64) -> Result<Vec<String>, StoreError> {
        let mut cursor = self
            .drivers
            .find(doc! {
                "isAvailable": true,
                "rating": { "$gte": min_rating },
            })
            .await
            .map_err(backend_error)?;
        let mut names = Vec::new();
        while let Some(driver) = cursor.try_next().await.map_err(backend_error)? {
            names.push(driver.get_str("name").unwrap_or_default().to_owned());
        }
        Ok(names)
    }
}

fn earnings_value(driver: &Document) -> f64 {
    match driver.get("earnings") {
        Some(Bson::Double(value)) => *value,
        Some(Bson::Int32(value)) => f64::from(*value),
        Some(Bson::Int64(value)) => *value as f64,
        _ => 0.0,
    }
}

#[async_trait]
impl DriverStore for MongoDriverStore {
    async fn set_status(&self, id: &RecordId, status: &DriverStatus) -> Result<u64, StoreError> {
        let outcome = self
            .drivers
            .update_one(
                doc! { "_id": object_id(id)? },
                doc! { "$set": { "status": status.as_str() } },
            )
            .await
            .map_err(backend_error)?;
        Ok(outcome.modified_count)
    }

    async fn fetch_earnings(&self, id: &RecordId) -> Result<Option<f64>, StoreError> {
        let found = self
            .drivers
            .find_one(doc! { "_id": object_id(id)? })
            .projection(doc! { "earnings": 1 })
            .await
            .map_err(backend_error)?;
        Ok(found.as_ref().map(earnings_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earnings_default_to_zero_for_absent_or_odd_values() {
        assert_eq!(earnings_value(&doc! {}), 0.0);
        assert_eq!(earnings_value(&doc! { "earnings": Bson::Null }), 0.0);
        assert_eq!(earnings_value(&doc! { "earnings": "plenty" }), 0.0);
    }

    #[test]
    fn earnings_accept_every_numeric_encoding() {
        assert_eq!(earnings_value(&doc! { "earnings": 12.5 }), 12.5);
        assert_eq!(earnings_value(&doc! { "earnings": 12_i32 }), 12.0);
        assert_eq!(earnings_value(&doc! { "earnings": 12_i64 }), 12.0);
    }
}
