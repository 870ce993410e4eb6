//! In-memory role lookup adapter.

use std::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::domain::ports::{RoleRepository, StoreError};
use crate::domain::role::Role;

/// Role store seeded with the canonical role records.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given canonical roles.
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: RwLock::new(roles.into_iter().collect()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Role>>, StoreError> {
        self.roles
            .read()
            .map_err(|_| StoreError::connection("role store lock poisoned"))
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, StoreError> {
        Ok(self.read()?.iter().find(|role| role.name() == name).cloned())
    }
}
