//! Port for role lookup adapters.

use async_trait::async_trait;

use crate::domain::role::Role;

use super::StoreError;

/// Port for resolving requested role names to canonical role records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Fetch the canonical role with the given name, if it exists.
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, StoreError>;
}

/// Fixture implementation for tests that do not exercise role lookups.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRoleRepository;

#[async_trait]
impl RoleRepository for FixtureRoleRepository {
    async fn find_by_name(&self, _name: &str) -> Result<Option<Role>, StoreError> {
        Ok(None)
    }
}
