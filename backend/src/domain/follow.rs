//! Follow edge records.

use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

/// Directed follow relationship between two users.
///
/// Unique per `(follower_user_id, followed_user_id)` pair. Edges are created
/// and deleted only by the follow-toggle protocol; neither user document
/// holds a back-pointer to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub follower_user_id: UserId,
    pub followed_user_id: UserId,
}

impl Follow {
    /// Create an edge from `follower_user_id` towards `followed_user_id`.
    pub fn new(follower_user_id: UserId, followed_user_id: UserId) -> Self {
        Self {
            follower_user_id,
            followed_user_id,
        }
    }
}
