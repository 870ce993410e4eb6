//! In-memory user store adapter.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{StoreError, UserRepository};
use crate::domain::user::{User, UserId, Username};

/// User store holding documents in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, StoreError> {
        self.users
            .read()
            .map_err(|_| StoreError::connection("user store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, StoreError> {
        self.users
            .write()
            .map_err(|_| StoreError::connection("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.write()?;
        if users.iter().any(|stored| stored.id == user.id) {
            return Err(StoreError::query(format!("duplicate user id {}", user.id)));
        }
        users.push(user.clone());
        debug!(id = %user.id, "inserted user");
        Ok(user.clone())
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.write()?;
        match users.iter_mut().find(|stored| stored.id == user.id) {
            Some(stored) => *stored = user.clone(),
            None => users.push(user.clone()),
        }
        debug!(id = %user.id, "saved user");
        Ok(user.clone())
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), StoreError> {
        self.write()?.retain(|stored| stored.id != *id);
        debug!(id = %id, "deleted user");
        Ok(())
    }
}
