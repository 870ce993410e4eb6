//! In-memory favorite edge store adapter.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::favorite::Favorite;
use crate::domain::ports::{FavoriteRepository, StoreError};
use crate::domain::tweet::TweetId;
use crate::domain::user::UserId;

/// Favorite edge store enforcing pair uniqueness.
#[derive(Debug, Default)]
pub struct InMemoryFavoriteRepository {
    favorites: RwLock<Vec<Favorite>>,
}

impl InMemoryFavoriteRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Favorite>>, StoreError> {
        self.favorites
            .read()
            .map_err(|_| StoreError::connection("favorite edge store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Favorite>>, StoreError> {
        self.favorites
            .write()
            .map_err(|_| StoreError::connection("favorite edge store lock poisoned"))
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn find_by_pair(
        &self,
        user: &UserId,
        tweet: &TweetId,
    ) -> Result<Option<Favorite>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .find(|edge| edge.user_id == *user && edge.tweet_id == *tweet)
            .cloned())
    }

    async fn insert(&self, favorite: &Favorite) -> Result<Favorite, StoreError> {
        let mut favorites = self.write()?;
        let duplicate = favorites
            .iter()
            .any(|edge| edge.user_id == favorite.user_id && edge.tweet_id == favorite.tweet_id);
        if duplicate {
            return Err(StoreError::query(format!(
                "duplicate favorite edge ({}, {})",
                favorite.user_id, favorite.tweet_id
            )));
        }
        favorites.push(favorite.clone());
        debug!(user = %favorite.user_id, tweet = %favorite.tweet_id, "inserted favorite edge");
        Ok(favorite.clone())
    }

    async fn delete_by_pair(&self, user: &UserId, tweet: &TweetId) -> Result<(), StoreError> {
        self.write()?
            .retain(|edge| edge.user_id != *user || edge.tweet_id != *tweet);
        debug!(user = %user, tweet = %tweet, "deleted favorite edge");
        Ok(())
    }
}
