//! MongoDB adapter for the analytics query port.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::{Document, doc};

use crate::domain::UsageTotals;
use crate::domain::ports::{AnalyticsQuery, StoreError};

use super::{DRIVERS, DocumentStore, RIDES, USERS, backend_error};

/// Collection-count adapter.
///
/// The three counts run one after another; any failure abandons the lot.
#[derive(Debug, Clone)]
pub struct MongoAnalytics {
    users: Collection<Document>,
    drivers: Collection<Document>,
    rides: Collection<Document>,
}

impl MongoAnalytics {
    /// Bind the adapter to the three service collections.
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            users: store.collection(USERS),
            drivers: store.collection(DRIVERS),
            rides: store.collection(RIDES),
        }
    }
}

#[async_trait]
impl AnalyticsQuery for MongoAnalytics {
    async fn usage_totals(&self) -> Result<UsageTotals, StoreError> {
        let total_users = self
            .users
            .count_documents(doc! {})
            .await
            .map_err(backend_error)?;
        let total_drivers = self
            .drivers
            .count_documents(doc! {})
            .await
            .map_err(backend_error)?;
        let total_rides = self
            .rides
            .count_documents(doc! {})
            .await
            .map_err(backend_error)?;
        Ok(UsageTotals {
            total_users,
            total_drivers,
            total_rides,
        })
    }
}
