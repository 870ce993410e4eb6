//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed social-graph model (users, tweets,
//! follow edges, favorite edges) and the services that mutate engagement
//! counters through the store ports. Types document their invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payloads.
//! - [`User`], [`Tweet`], [`Role`], [`Follow`], [`Favorite`]: entities and
//!   edge records.
//! - [`UserGraphService`], [`TweetEngagementService`]: orchestration over
//!   the ports in [`ports`].

pub mod error;
pub mod favorite;
pub mod follow;
pub mod ports;
pub mod role;
pub mod tweet;
pub mod tweet_service;
pub mod user;
pub mod user_service;
pub mod validator;

pub use self::error::{Error, ErrorCode};
pub use self::favorite::Favorite;
pub use self::follow::Follow;
pub use self::role::Role;
pub use self::tweet::{Tweet, TweetId, TweetValidationError};
pub use self::tweet_service::TweetEngagementService;
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_service::UserGraphService;
pub use self::validator::validate_user_action;

/// Convenient domain result alias.
pub type DomainResult<T> = Result<T, Error>;
