//! In-memory implementation of the store ports.
//!
//! Backs the endpoint tests and the no-store fallback mode. Mirrors the
//! document store's observable behaviour, including the detail that an
//! update leaving a document unchanged reports zero modifications.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{AnalyticsQuery, DriverStore, StoreError, UserStore};
use crate::domain::{
    Credentials, DriverSeed, DriverStatus, NewUser, RecordId, UsageTotals, UserProfile,
};

#[derive(Debug, Clone)]
struct StoredUser {
    username: String,
    password: String,
    email: String,
}

#[derive(Debug, Clone)]
struct StoredDriver {
    #[allow(dead_code, reason = "seed fields are stored whole; only some are read back")]
    seed: DriverSeed,
    status: Option<String>,
    earnings: Option<f64>,
}

/// Process-memory store implementing every port.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: AtomicU64,
    users: RwLock<HashMap<RecordId, StoredUser>>,
    drivers: RwLock<HashMap<RecordId, StoredDriver>>,
    rides: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_record_id(&self) -> RecordId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        RecordId::new(format!("{n:024x}"))
            .unwrap_or_else(|error| panic!("counter encoding must be a valid record id: {error}"))
    }

    /// Insert a user directly, bypassing the HTTP surface.
    pub fn insert_user(&self, user: NewUser) -> RecordId {
        let id = self.next_record_id();
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                id.clone(),
                StoredUser {
                    username: user.username,
                    password: user.password,
                    email: user.email,
                },
            );
        id
    }

    /// Insert a driver record as the seeding utility would.
    pub fn insert_driver(&self, seed: DriverSeed, earnings: Option<f64>) -> RecordId {
        let id = self.next_record_id();
        self.drivers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                id.clone(),
                StoredDriver {
                    seed,
                    status: None,
                    earnings,
                },
            );
        id
    }

    /// Record one ride for the analytics counts.
    pub fn add_ride(&self) {
        self.rides.fetch_add(1, Ordering::Relaxed);
    }

    /// Read back a driver's current status.
    pub fn driver_status(&self, id: &RecordId) -> Option<String> {
        self.drivers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .and_then(|driver| driver.status.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<RecordId, StoreError> {
        Ok(self.insert_user(user))
    }

    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<RecordId>, StoreError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users
            .iter()
            .find(|(_, user)| {
                user.username == credentials.username && user.password == credentials.password
            })
            .map(|(id, _)| id.clone()))
    }

    async fn fetch_profile(&self, id: &RecordId) -> Result<Option<UserProfile>, StoreError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(users.get(id).map(|user| UserProfile {
            id: id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }))
    }

    async fn delete(&self, id: &RecordId) -> Result<u64, StoreError> {
        let removed = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl DriverStore for MemoryStore {
    async fn set_status(&self, id: &RecordId, status: &DriverStatus) -> Result<u64, StoreError> {
        let mut drivers = self.drivers.write().unwrap_or_else(PoisonError::into_inner);
        let Some(driver) = drivers.get_mut(id) else {
            return Ok(0);
        };
        if driver.status.as_deref() == Some(status.as_str()) {
            return Ok(0);
        }
        driver.status = Some(status.as_str().to_owned());
        Ok(1)
    }

    async fn fetch_earnings(&self, id: &RecordId) -> Result<Option<f64>, StoreError> {
        let drivers = self.drivers.read().unwrap_or_else(PoisonError::into_inner);
        Ok(drivers
            .get(id)
            .map(|driver| driver.earnings.unwrap_or(0.0)))
    }
}

#[async_trait]
impl AnalyticsQuery for MemoryStore {
    async fn usage_totals(&self) -> Result<UsageTotals, StoreError> {
        let total_users = self.users.read().unwrap_or_else(PoisonError::into_inner).len() as u64;
        let total_drivers = self
            .drivers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len() as u64;
        Ok(UsageTotals {
            total_users,
            total_drivers,
            total_rides: self.rides.load(Ordering::Relaxed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> DriverSeed {
        DriverSeed {
            name: "Alice Smith".into(),
            vehicle_type: "SUV".into(),
            is_available: false,
            rating: 4.5,
        }
    }

    #[tokio::test]
    async fn create_assigns_distinct_identifiers() {
        let store = MemoryStore::new();
        let first = store
            .create(NewUser {
                username: "a".into(),
                password: "p".into(),
                email: "a@example.com".into(),
            })
            .await
            .expect("create succeeds");
        let second = store
            .create(NewUser {
                username: "b".into(),
                password: "p".into(),
                email: "b@example.com".into(),
            })
            .await
            .expect("create succeeds");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn set_status_mirrors_modified_count_semantics() {
        let store = MemoryStore::new();
        let id = store.insert_driver(seed(), None);
        let status = DriverStatus::new("active").expect("valid status");
        assert_eq!(store.set_status(&id, &status).await, Ok(1));
        assert_eq!(store.set_status(&id, &status).await, Ok(0));
        let missing = RecordId::new("507f1f77bcf86cd799439011").expect("valid id");
        assert_eq!(store.set_status(&missing, &status).await, Ok(0));
    }

    #[tokio::test]
    async fn duplicate_usernames_are_tolerated() {
        let store = MemoryStore::new();
        let user = NewUser {
            username: "twin".into(),
            password: "p".into(),
            email: "twin@example.com".into(),
        };
        let first = store.insert_user(user.clone());
        let second = store.insert_user(user);
        assert_ne!(first, second);
        let found = store
            .find_by_credentials(&Credentials {
                username: "twin".into(),
                password: "p".into(),
            })
            .await
            .expect("lookup succeeds")
            .expect("some match");
        assert!(found == first || found == second);
    }
}
