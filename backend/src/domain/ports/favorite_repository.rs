//! Port for favorite edge store adapters.

use async_trait::async_trait;

use crate::domain::favorite::Favorite;
use crate::domain::tweet::TweetId;
use crate::domain::user::UserId;

use super::StoreError;

/// Port for the favorite edge store.
///
/// Edges are unique per `(user, tweet)` pair; adapters reject a duplicate
/// insert with [`StoreError::Query`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Fetch the edge recording that `user` favorited `tweet`, if any.
    async fn find_by_pair(
        &self,
        user: &UserId,
        tweet: &TweetId,
    ) -> Result<Option<Favorite>, StoreError>;

    /// Insert a new edge, returning the stored record.
    async fn insert(&self, favorite: &Favorite) -> Result<Favorite, StoreError>;

    /// Delete the edge for the pair; deleting an absent pair is a no-op.
    async fn delete_by_pair(&self, user: &UserId, tweet: &TweetId) -> Result<(), StoreError>;
}

/// Fixture implementation for tests that do not exercise favorite edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFavoriteRepository;

#[async_trait]
impl FavoriteRepository for FixtureFavoriteRepository {
    async fn find_by_pair(
        &self,
        _user: &UserId,
        _tweet: &TweetId,
    ) -> Result<Option<Favorite>, StoreError> {
        Ok(None)
    }

    async fn insert(&self, favorite: &Favorite) -> Result<Favorite, StoreError> {
        Ok(favorite.clone())
    }

    async fn delete_by_pair(&self, _user: &UserId, _tweet: &TweetId) -> Result<(), StoreError> {
        Ok(())
    }
}
