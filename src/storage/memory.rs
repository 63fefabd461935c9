/**
 * In-Memory Store
 *
 * A `Store` implementation backed by `RwLock`-guarded hash maps. Used by
 * the test suite so handlers and services can be exercised without a
 * database; it enforces the same email uniqueness the real backend's
 * unique index does.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Profile, User};
use crate::storage::{Store, StoreError};

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        // Case-sensitive exact match, like the unique index it stands in for
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("email"));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        self.users.write().await.remove(&id);
        Ok(())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn delete_profile(&self, user_id: Uuid) -> Result<(), StoreError> {
        self.profiles.write().await.remove(&user_id);
        Ok(())
    }
}
