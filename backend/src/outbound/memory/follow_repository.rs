//! In-memory follow edge store adapter.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::follow::Follow;
use crate::domain::ports::{FollowRepository, StoreError};
use crate::domain::user::UserId;

/// Follow edge store enforcing pair uniqueness.
#[derive(Debug, Default)]
pub struct InMemoryFollowRepository {
    follows: RwLock<Vec<Follow>>,
}

impl InMemoryFollowRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Follow>>, StoreError> {
        self.follows
            .read()
            .map_err(|_| StoreError::connection("follow edge store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Follow>>, StoreError> {
        self.follows
            .write()
            .map_err(|_| StoreError::connection("follow edge store lock poisoned"))
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn find_by_pair(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<Option<Follow>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .find(|edge| edge.follower_user_id == *follower && edge.followed_user_id == *followed)
            .cloned())
    }

    async fn find_all_by_followed_user_id(
        &self,
        followed: &UserId,
    ) -> Result<Vec<Follow>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|edge| edge.followed_user_id == *followed)
            .cloned()
            .collect())
    }

    async fn find_all_by_follower_user_id(
        &self,
        follower: &UserId,
    ) -> Result<Vec<Follow>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|edge| edge.follower_user_id == *follower)
            .cloned()
            .collect())
    }

    async fn insert(&self, follow: &Follow) -> Result<Follow, StoreError> {
        let mut follows = self.write()?;
        let duplicate = follows.iter().any(|edge| {
            edge.follower_user_id == follow.follower_user_id
                && edge.followed_user_id == follow.followed_user_id
        });
        if duplicate {
            return Err(StoreError::query(format!(
                "duplicate follow edge ({}, {})",
                follow.follower_user_id, follow.followed_user_id
            )));
        }
        follows.push(follow.clone());
        debug!(
            follower = %follow.follower_user_id,
            followed = %follow.followed_user_id,
            "inserted follow edge"
        );
        Ok(follow.clone())
    }

    async fn delete_by_pair(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<(), StoreError> {
        self.write()?.retain(|edge| {
            edge.follower_user_id != *follower || edge.followed_user_id != *followed
        });
        debug!(follower = %follower, followed = %followed, "deleted follow edge");
        Ok(())
    }
}
