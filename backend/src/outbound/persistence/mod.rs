//! Document store adapters.
//!
//! One adapter per port. The MongoDB adapters are thin: each port method is
//! a single driver call plus error mapping, matching the one-round-trip rule
//! the handlers rely on. [`MemoryStore`] implements the same ports against
//! process memory and backs tests and the no-store fallback.

mod memory;
mod mongo_analytics;
mod mongo_drivers;
mod mongo_users;

pub use memory::MemoryStore;
pub use mongo_analytics::MongoAnalytics;
pub use mongo_drivers::MongoDriverStore;
pub use mongo_users::MongoUserStore;

use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection, Database};

use crate::domain::RecordId;
use crate::domain::ports::StoreError;

pub(crate) const USERS: &str = "users";
pub(crate) const DRIVERS: &str = "drivers";
pub(crate) const RIDES: &str = "rides";

/// Shared handle to the backing document store.
///
/// Created once at startup and cloned into every adapter. The driver's
/// client multiplexes all in-flight operations over its own pool, so a
/// single handle serves every concurrent request.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    database: Database,
}

impl DocumentStore {
    /// Build a store handle for the given endpoint and database.
    ///
    /// The driver connects lazily; a bad endpoint surfaces on the first
    /// operation rather than here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|error| StoreError::backend(error.to_string()))?;
        Ok(Self {
            database: client.database(database),
        })
    }

    pub(crate) fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

/// Map a driver failure onto the port error type.
pub(crate) fn backend_error(error: mongodb::error::Error) -> StoreError {
    StoreError::backend(error.to_string())
}

/// Convert a validated record id into the driver's id type.
///
/// Record ids are checked hexadecimal on construction, so this only fails if
/// the two encodings ever drift apart.
pub(crate) fn object_id(id: &RecordId) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id.as_str()).map_err(|error| StoreError::malformed(error.to_string()))
}

/// Convert a store-assigned object id back into a record id.
pub(crate) fn record_id(id: ObjectId) -> Result<RecordId, StoreError> {
    RecordId::new(id.to_hex()).map_err(|error| StoreError::malformed(error.to_string()))
}
