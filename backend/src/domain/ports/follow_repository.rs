//! Port for follow edge store adapters.

use async_trait::async_trait;

use crate::domain::follow::Follow;
use crate::domain::user::UserId;

use super::StoreError;

/// Port for the follow edge store.
///
/// Edges are unique per `(follower, followed)` pair; adapters reject a
/// duplicate insert with [`StoreError::Query`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Fetch the edge from `follower` towards `followed`, if any.
    async fn find_by_pair(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<Option<Follow>, StoreError>;

    /// List every edge naming `followed` as the followed party.
    async fn find_all_by_followed_user_id(
        &self,
        followed: &UserId,
    ) -> Result<Vec<Follow>, StoreError>;

    /// List every edge naming `follower` as the following party.
    async fn find_all_by_follower_user_id(
        &self,
        follower: &UserId,
    ) -> Result<Vec<Follow>, StoreError>;

    /// Insert a new edge, returning the stored record.
    async fn insert(&self, follow: &Follow) -> Result<Follow, StoreError>;

    /// Delete the edge for the pair; deleting an absent pair is a no-op.
    async fn delete_by_pair(&self, follower: &UserId, followed: &UserId)
    -> Result<(), StoreError>;
}

/// Fixture implementation for tests that do not exercise follow edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFollowRepository;

#[async_trait]
impl FollowRepository for FixtureFollowRepository {
    async fn find_by_pair(
        &self,
        _follower: &UserId,
        _followed: &UserId,
    ) -> Result<Option<Follow>, StoreError> {
        Ok(None)
    }

    async fn find_all_by_followed_user_id(
        &self,
        _followed: &UserId,
    ) -> Result<Vec<Follow>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_all_by_follower_user_id(
        &self,
        _follower: &UserId,
    ) -> Result<Vec<Follow>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, follow: &Follow) -> Result<Follow, StoreError> {
        Ok(follow.clone())
    }

    async fn delete_by_pair(
        &self,
        _follower: &UserId,
        _followed: &UserId,
    ) -> Result<(), StoreError> {
        Ok(())
    }
}
