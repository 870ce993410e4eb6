//! In-memory tweet store adapter.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{StoreError, TweetRepository};
use crate::domain::tweet::{Tweet, TweetId};
use crate::domain::user::Username;

/// Tweet store holding documents in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTweetRepository {
    tweets: RwLock<Vec<Tweet>>,
}

impl InMemoryTweetRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Tweet>>, StoreError> {
        self.tweets
            .read()
            .map_err(|_| StoreError::connection("tweet store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Tweet>>, StoreError> {
        self.tweets
            .write()
            .map_err(|_| StoreError::connection("tweet store lock poisoned"))
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {
    async fn find_all(&self) -> Result<Vec<Tweet>, StoreError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &TweetId) -> Result<Option<Tweet>, StoreError> {
        Ok(self.read()?.iter().find(|tweet| tweet.id == *id).cloned())
    }

    async fn find_all_by_parent_id(
        &self,
        parent_id: &TweetId,
    ) -> Result<Vec<Tweet>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|tweet| tweet.parent_id.as_ref() == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn find_all_by_owner(&self, owner: &Username) -> Result<Vec<Tweet>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|tweet| tweet.owner == *owner)
            .cloned()
            .collect())
    }

    async fn insert(&self, tweet: &Tweet) -> Result<Tweet, StoreError> {
        let mut tweets = self.write()?;
        if tweets.iter().any(|stored| stored.id == tweet.id) {
            return Err(StoreError::query(format!(
                "duplicate tweet id {}",
                tweet.id
            )));
        }
        tweets.push(tweet.clone());
        debug!(id = %tweet.id, "inserted tweet");
        Ok(tweet.clone())
    }

    async fn save(&self, tweet: &Tweet) -> Result<Tweet, StoreError> {
        let mut tweets = self.write()?;
        match tweets.iter_mut().find(|stored| stored.id == tweet.id) {
            Some(stored) => *stored = tweet.clone(),
            None => tweets.push(tweet.clone()),
        }
        debug!(id = %tweet.id, "saved tweet");
        Ok(tweet.clone())
    }

    async fn delete_by_id(&self, id: &TweetId) -> Result<(), StoreError> {
        self.write()?.retain(|stored| stored.id != *id);
        debug!(id = %id, "deleted tweet");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tweet(id: &str, owner: &str) -> Tweet {
        let mut tweet = Tweet::new(Username::new(owner).expect("valid username"), "hello");
        tweet.id = TweetId::new(id).expect("valid tweet id");
        tweet
    }

    #[tokio::test]
    async fn insert_then_lookup_round_trips() {
        let repo = InMemoryTweetRepository::new();
        let tweet = sample_tweet("t1", "alice");

        repo.insert(&tweet).await.expect("insert succeeds");

        let stored = repo
            .find_by_id(&tweet.id)
            .await
            .expect("lookup succeeds")
            .expect("tweet is stored");
        assert_eq!(stored, tweet);
    }

    #[tokio::test]
    async fn parent_filter_returns_only_replies() {
        let repo = InMemoryTweetRepository::new();
        let parent = sample_tweet("t0", "alice");
        let mut reply = sample_tweet("t1", "bob");
        reply.parent_id = Some(parent.id.clone());
        let unrelated = sample_tweet("t2", "carol");

        repo.insert(&parent).await.expect("insert succeeds");
        repo.insert(&reply).await.expect("insert succeeds");
        repo.insert(&unrelated).await.expect("insert succeeds");

        let replies = repo
            .find_all_by_parent_id(&parent.id)
            .await
            .expect("list succeeds");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies.first().map(|tweet| tweet.id.as_str()), Some("t1"));
    }

    #[tokio::test]
    async fn owner_filter_returns_only_their_tweets() {
        let repo = InMemoryTweetRepository::new();
        repo.insert(&sample_tweet("t1", "alice"))
            .await
            .expect("insert succeeds");
        repo.insert(&sample_tweet("t2", "bob"))
            .await
            .expect("insert succeeds");

        let tweets = repo
            .find_all_by_owner(&Username::new("alice").expect("valid username"))
            .await
            .expect("list succeeds");
        assert_eq!(tweets.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_document() {
        let repo = InMemoryTweetRepository::new();
        let tweet = sample_tweet("t1", "alice");
        repo.insert(&tweet).await.expect("insert succeeds");

        repo.delete_by_id(&tweet.id).await.expect("delete succeeds");
        assert!(
            repo.find_by_id(&tweet.id)
                .await
                .expect("lookup succeeds")
                .is_none()
        );
    }
}
