//! Tweet data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::Username;

/// Validation errors returned by [`TweetId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TweetValidationError {
    EmptyId,
    UntrimmedId,
}

impl fmt::Display for TweetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "tweet id must not be empty"),
            Self::UntrimmedId => write!(f, "tweet id must not carry surrounding whitespace"),
        }
    }
}

impl std::error::Error for TweetValidationError {}

/// Opaque tweet identifier as issued by the tweet store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TweetId(String);

impl TweetId {
    /// Validate and construct a [`TweetId`] from borrowed input.
    pub fn new(id: impl Into<String>) -> Result<Self, TweetValidationError> {
        Self::from_owned(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, TweetValidationError> {
        if id.is_empty() {
            return Err(TweetValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(TweetValidationError::UntrimmedId);
        }
        Ok(Self(id))
    }

    /// Access the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TweetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TweetId> for String {
    fn from(value: TweetId) -> Self {
        value.0
    }
}

impl TryFrom<String> for TweetId {
    type Error = TweetValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A published tweet, optionally threaded under a parent as a reply.
///
/// ## Invariants
/// - `favorite_count` tracks the number of favorite edges referencing this
///   tweet; after every toggle `favorited == (favorite_count >= 1)`.
/// - Counters never go below zero; withdrawals saturate.
/// - `reply_count` is not adjusted when replies are created; thread sizes
///   are derived from `parent_id` references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub id: TweetId,
    pub owner: Username,
    pub text: String,
    pub content: Option<String>,
    pub parent_id: Option<TweetId>,
    pub favorite_count: u32,
    pub retweet_count: u32,
    pub reply_count: u32,
    pub favorited: bool,
    pub retweeted: bool,
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    /// Build a standalone tweet with a freshly generated id and zeroed
    /// engagement state.
    pub fn new(owner: Username, text: impl Into<String>) -> Self {
        Self {
            id: TweetId::generate(),
            owner,
            text: text.into(),
            content: None,
            parent_id: None,
            favorite_count: 0,
            retweet_count: 0,
            reply_count: 0,
            favorited: false,
            retweeted: false,
            created_at: Utc::now(),
        }
    }

    /// Apply a favorite edge gained through the toggle protocol.
    pub fn record_favorite(&mut self) {
        self.favorite_count += 1;
        self.favorited = true;
    }

    /// Apply a favorite edge removed through the toggle protocol.
    pub fn record_unfavorite(&mut self) {
        self.favorite_count = self.favorite_count.saturating_sub(1);
        self.favorited = self.favorite_count >= 1;
    }
}
