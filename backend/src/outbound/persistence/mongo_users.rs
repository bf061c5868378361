//! MongoDB adapter for the user store port.

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::Collection;

use crate::domain::ports::{StoreError, UserStore};
use crate::domain::{Credentials, NewUser, RecordId, UserProfile};

use super::{DocumentStore, USERS, backend_error, object_id, record_id};

/// User collection adapter.
#[derive(Debug, Clone)]
pub struct MongoUserStore {
    users: Collection<Document>,
}

impl MongoUserStore {
    /// Bind the adapter to the store's user collection.
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            users: store.collection(USERS),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn create(&self, user: NewUser) -> Result<RecordId, StoreError> {
        let NewUser {
            username,
            password,
            email,
        } = user;
        let inserted = self
            .users
            .insert_one(doc! {
                "username": username,
                "password": password,
                "email": email,
            })
            .await
            .map_err(backend_error)?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::malformed("insert acknowledged without an object id"))?;
        record_id(id)
    }

    async fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<RecordId>, StoreError> {
        // Plaintext equality: the password is part of the filter.
        let found = self
            .users
            .find_one(doc! {
                "username": &credentials.username,
                "password": &credentials.password,
            })
            .await
            .map_err(backend_error)?;
        match found {
            None => Ok(None),
            Some(user) => {
                let id = user
                    .get_object_id("_id")
                    .map_err(|_| StoreError::malformed("user document missing _id"))?;
                record_id(id).map(Some)
            }
        }
    }

    async fn fetch_profile(&self, id: &RecordId) -> Result<Option<UserProfile>, StoreError> {
        let found = self
            .users
            .find_one(doc! { "_id": object_id(id)? })
            .projection(doc! { "password": 0 })
            .await
            .map_err(backend_error)?;
        Ok(found.map(|user| UserProfile {
            id: id.clone(),
            username: user.get_str("username").unwrap_or_default().to_owned(),
            email: user.get_str("email").unwrap_or_default().to_owned(),
        }))
    }

    async fn delete(&self, id: &RecordId) -> Result<u64, StoreError> {
        self.users
            .delete_one(doc! { "_id": object_id(id)? })
            .await
            .map(|outcome| outcome.deleted_count)
            .map_err(backend_error)
    }
}
