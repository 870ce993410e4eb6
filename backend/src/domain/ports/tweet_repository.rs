//! Port for tweet document store adapters.

use async_trait::async_trait;

use crate::domain::tweet::{Tweet, TweetId};
use crate::domain::user::Username;

use super::StoreError;

/// Port for the tweet document store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// List every stored tweet.
    async fn find_all(&self) -> Result<Vec<Tweet>, StoreError>;

    /// Fetch a tweet by identifier.
    async fn find_by_id(&self, id: &TweetId) -> Result<Option<Tweet>, StoreError>;

    /// List the tweets threaded directly under `parent_id`.
    async fn find_all_by_parent_id(&self, parent_id: &TweetId)
    -> Result<Vec<Tweet>, StoreError>;

    /// List the tweets published by `owner`.
    async fn find_all_by_owner(&self, owner: &Username) -> Result<Vec<Tweet>, StoreError>;

    /// Insert a new tweet record, returning the stored document.
    async fn insert(&self, tweet: &Tweet) -> Result<Tweet, StoreError>;

    /// Replace the record with the same id, inserting it when absent.
    async fn save(&self, tweet: &Tweet) -> Result<Tweet, StoreError>;

    /// Delete a tweet by identifier; deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: &TweetId) -> Result<(), StoreError>;
}

/// Fixture implementation for tests that do not exercise tweet persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTweetRepository;

#[async_trait]
impl TweetRepository for FixtureTweetRepository {
    async fn find_all(&self) -> Result<Vec<Tweet>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &TweetId) -> Result<Option<Tweet>, StoreError> {
        Ok(None)
    }

    async fn find_all_by_parent_id(
        &self,
        _parent_id: &TweetId,
    ) -> Result<Vec<Tweet>, StoreError> {
        Ok(Vec::new())
    }

    async fn find_all_by_owner(&self, _owner: &Username) -> Result<Vec<Tweet>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert(&self, tweet: &Tweet) -> Result<Tweet, StoreError> {
        Ok(tweet.clone())
    }

    async fn save(&self, tweet: &Tweet) -> Result<Tweet, StoreError> {
        Ok(tweet.clone())
    }

    async fn delete_by_id(&self, _id: &TweetId) -> Result<(), StoreError> {
        Ok(())
    }
}
