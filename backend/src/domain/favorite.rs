//! Favorite edge records.

use serde::{Deserialize, Serialize};

use crate::domain::tweet::TweetId;
use crate::domain::user::UserId;

/// Favorite relationship between a user and a tweet.
///
/// Unique per `(user_id, tweet_id)` pair. Edges are created and deleted only
/// by the favorite-toggle protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: UserId,
    pub tweet_id: TweetId,
}

impl Favorite {
    /// Create an edge recording that `user_id` favorited `tweet_id`.
    pub fn new(user_id: UserId, tweet_id: TweetId) -> Self {
        Self { user_id, tweet_id }
    }
}
