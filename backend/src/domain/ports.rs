//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with the document
//! store. Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of returning `anyhow::Result`.
//! Handlers hold `Arc<dyn Trait>` and never see a driver type.

use async_trait::async_trait;
use thiserror::Error;

use super::{Credentials, DriverStatus, NewUser, RecordId, UsageTotals, UserProfile};

/// Errors surfaced by store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected the operation or could not be reached.
    #[error("document store failure: {message}")]
    Backend { message: String },
    /// A stored document did not have the shape the adapter expected.
    #[error("stored document malformed: {message}")]
    Malformed { message: String },
}

impl StoreError {
    /// Helper for driver-level failures.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Helper for unexpected document shapes.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Store operations backing the user endpoints.
///
/// Every method is a single logical store round trip.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return the store-assigned identifier.
    async fn create(&self, user: NewUser) -> Result<RecordId, StoreError>;

    /// Find the first user matching the credentials by direct equality.
    ///
    /// Returns `Ok(None)` when nothing matches; the caller decides whether
    /// that is distinguishable from a backend failure (on this wire contract
    /// it is not).
    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<RecordId>, StoreError>;

    /// Fetch the viewable profile for a stored user.
    async fn fetch_profile(&self, id: &RecordId) -> Result<Option<UserProfile>, StoreError>;

    /// Delete a user, returning the number of documents removed.
    async fn delete(&self, id: &RecordId) -> Result<u64, StoreError>;
}

/// Store operations backing the driver endpoints.
#[async_trait]
pub trait DriverStore: Send + Sync {
    /// Set a driver's status, returning the number of documents modified.
    ///
    /// A write that matches a document but leaves it unchanged reports zero,
    /// exactly as the store does.
    async fn set_status(&self, id: &RecordId, status: &DriverStatus) -> Result<u64, StoreError>;

    /// Fetch a driver's earnings.
    ///
    /// `Ok(Some(0.0))` when the driver exists but has no earnings field;
    /// `Ok(None)` when there is no such driver.
    async fn fetch_earnings(&self, id: &RecordId) -> Result<Option<f64>, StoreError>;
}

/// Aggregate counts backing the admin analytics endpoint.
#[async_trait]
pub trait AnalyticsQuery: Send + Sync {
    /// Count the three service collections independently.
    async fn usage_totals(&self) -> Result<UsageTotals, StoreError>;
}
