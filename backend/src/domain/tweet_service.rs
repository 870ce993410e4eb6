//! Tweet engagement domain service.
//!
//! Orchestrates favorite toggling, reply creation, and owner-checked tweet
//! mutations over the tweet store and favorite-edge store.

use std::sync::Arc;

use crate::domain::DomainResult;
use crate::domain::error::Error;
use crate::domain::favorite::Favorite;
use crate::domain::ports::{FavoriteRepository, StoreError, TweetRepository};
use crate::domain::tweet::{Tweet, TweetId};
use crate::domain::user::{UserId, Username};
use crate::domain::validator::validate_user_action;

fn map_tweet_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("tweet store unavailable: {message}"))
        }
        StoreError::Query { message } => Error::internal(format!("tweet store error: {message}")),
    }
}

fn map_favorite_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("favorite edge store unavailable: {message}"))
        }
        StoreError::Query { message } => {
            Error::internal(format!("favorite edge store error: {message}"))
        }
    }
}

/// Service orchestrating tweet reads and engagement mutations.
#[derive(Clone)]
pub struct TweetEngagementService<T, F> {
    tweet_repo: Arc<T>,
    favorite_repo: Arc<F>,
}

impl<T, F> TweetEngagementService<T, F> {
    /// Create a new service over the tweet and favorite-edge stores.
    pub fn new(tweet_repo: Arc<T>, favorite_repo: Arc<F>) -> Self {
        Self {
            tweet_repo,
            favorite_repo,
        }
    }
}

impl<T, F> TweetEngagementService<T, F>
where
    T: TweetRepository,
    F: FavoriteRepository,
{
    /// List every stored tweet.
    pub async fn find_all(&self) -> DomainResult<Vec<Tweet>> {
        self.tweet_repo
            .find_all()
            .await
            .map_err(map_tweet_store_error)
    }

    /// Fetch a tweet by id.
    pub async fn find_by_id(&self, tweet_id: &TweetId) -> DomainResult<Tweet> {
        self.tweet_repo
            .find_by_id(tweet_id)
            .await
            .map_err(map_tweet_store_error)?
            .ok_or_else(|| Error::not_found(format!("tweet {tweet_id} not found")))
    }

    /// List the direct replies to `tweet_id`.
    pub async fn find_replies(&self, tweet_id: &TweetId) -> DomainResult<Vec<Tweet>> {
        self.tweet_repo
            .find_all_by_parent_id(tweet_id)
            .await
            .map_err(map_tweet_store_error)
    }

    /// List every tweet published by `username`.
    pub async fn find_all_by_username(&self, username: &Username) -> DomainResult<Vec<Tweet>> {
        self.tweet_repo
            .find_all_by_owner(username)
            .await
            .map_err(map_tweet_store_error)
    }

    /// Store a new tweet.
    pub async fn create(&self, tweet: Tweet) -> DomainResult<Tweet> {
        self.tweet_repo
            .insert(&tweet)
            .await
            .map_err(map_tweet_store_error)
    }

    /// Store `reply` as a reply threaded under `parent_tweet_id`.
    ///
    /// The parent's `reply_count` is left untouched; thread sizes are derived
    /// from `parent_id` references, not from the counter.
    pub async fn reply_to_tweet(
        &self,
        mut reply: Tweet,
        parent_tweet_id: &TweetId,
    ) -> DomainResult<Tweet> {
        reply.parent_id = Some(parent_tweet_id.clone());
        self.create(reply).await
    }

    /// Toggle `acting_user_id`'s favorite on `tweet_id`.
    ///
    /// When no edge exists the edge is inserted and the counter raised; when
    /// one does the edge is deleted and the counter lowered. The counter
    /// write is system-initiated and skips the ownership check applied to
    /// user-facing updates. The edge and counter writes are not wrapped in a
    /// transaction; concurrent toggles on the same tweet can race.
    pub async fn favorite_toggle(
        &self,
        tweet_id: &TweetId,
        acting_user_id: &UserId,
    ) -> DomainResult<Tweet> {
        let mut tweet = self.find_by_id(tweet_id).await?;

        let edge = self
            .favorite_repo
            .find_by_pair(acting_user_id, tweet_id)
            .await
            .map_err(map_favorite_store_error)?;

        match edge {
            Some(favorite) => {
                self.favorite_repo
                    .delete_by_pair(&favorite.user_id, &favorite.tweet_id)
                    .await
                    .map_err(map_favorite_store_error)?;
                tweet.record_unfavorite();
            }
            None => {
                let favorite = Favorite::new(acting_user_id.clone(), tweet_id.clone());
                self.favorite_repo
                    .insert(&favorite)
                    .await
                    .map_err(map_favorite_store_error)?;
                tweet.record_favorite();
            }
        }

        self.tweet_repo
            .save(&tweet)
            .await
            .map_err(map_tweet_store_error)
    }

    /// Overwrite the mutable fields of `tweet_id` from `new_tweet`.
    ///
    /// Only the stored owner may update. Identity, ownership, threading, and
    /// the creation timestamp are preserved from the stored record; text,
    /// content, counters, and flags are taken from `new_tweet`.
    pub async fn update(
        &self,
        new_tweet: Tweet,
        tweet_id: &TweetId,
        acting_username: &Username,
    ) -> DomainResult<Tweet> {
        let mut tweet = self.find_by_id(tweet_id).await?;
        validate_user_action(acting_username.as_ref(), tweet.owner.as_ref())?;

        tweet.text = new_tweet.text;
        tweet.content = new_tweet.content;
        tweet.retweet_count = new_tweet.retweet_count;
        tweet.favorite_count = new_tweet.favorite_count;
        tweet.reply_count = new_tweet.reply_count;
        tweet.retweeted = new_tweet.retweeted;
        tweet.favorited = new_tweet.favorited;

        self.tweet_repo
            .save(&tweet)
            .await
            .map_err(map_tweet_store_error)
    }

    /// Delete `tweet_id` after confirming `acting_username` owns it.
    pub async fn delete_by_id(
        &self,
        tweet_id: &TweetId,
        acting_username: &Username,
    ) -> DomainResult<()> {
        let tweet = self.find_by_id(tweet_id).await?;
        validate_user_action(acting_username.as_ref(), tweet.owner.as_ref())?;

        self.tweet_repo
            .delete_by_id(tweet_id)
            .await
            .map_err(map_tweet_store_error)
    }
}

#[cfg(test)]
#[path = "tweet_service_tests.rs"]
mod tests;
