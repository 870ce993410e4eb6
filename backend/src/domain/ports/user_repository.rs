//! Port for user document store adapters.

use async_trait::async_trait;

use crate::domain::user::{User, UserId, Username};

use super::StoreError;

/// Port for the user document store.
///
/// Usernames and email addresses are unique fields; `find_by_username` and
/// `find_by_email` return at most one record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// Fetch a user by unique username.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError>;

    /// Fetch a user by unique email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user record, returning the stored document.
    async fn insert(&self, user: &User) -> Result<User, StoreError>;

    /// Replace the record with the same id, inserting it when absent.
    async fn save(&self, user: &User) -> Result<User, StoreError>;

    /// Delete a user by identifier; deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: &UserId) -> Result<(), StoreError>;
}

/// Fixture implementation for tests that do not exercise user persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn find_by_username(&self, _username: &Username) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, user: &User) -> Result<User, StoreError> {
        Ok(user.clone())
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        Ok(user.clone())
    }

    async fn delete_by_id(&self, _id: &UserId) -> Result<(), StoreError> {
        Ok(())
    }
}
