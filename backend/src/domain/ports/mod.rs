//! Driven ports for the store collaborators at the hexagonal boundary.
//!
//! The domain consumes the user and tweet document stores, the follow and
//! favorite edge stores, the role lookup, and the password hasher through
//! these traits. Adapters live in [`crate::outbound`]; every port also ships
//! a `Fixture*` implementation for tests that do not exercise that
//! collaborator.

mod favorite_repository;
mod follow_repository;
mod password_hasher;
mod role_repository;
mod tweet_repository;
mod user_repository;

#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
pub use favorite_repository::{FavoriteRepository, FixtureFavoriteRepository};
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_repository::{FixtureFollowRepository, FollowRepository};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{FixturePasswordHasher, PasswordHasher};
#[cfg(test)]
pub use role_repository::MockRoleRepository;
pub use role_repository::{FixtureRoleRepository, RoleRepository};
#[cfg(test)]
pub use tweet_repository::MockTweetRepository;
pub use tweet_repository::{FixtureTweetRepository, TweetRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository};

/// Failure raised by a store adapter.
///
/// Every store shares the same failure vocabulary: either the backing
/// service was unreachable, or a query or mutation failed while executing.
/// Services map these onto [`crate::domain::Error`] at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Connection-failure constructor.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query-failure constructor.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
