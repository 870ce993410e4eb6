//! In-memory store adapters.
//!
//! Document-store stand-ins backed by `RwLock`-guarded vectors, for tests and
//! embedded use. Each call locks a single store only; nothing wraps the edge
//! and counter writes of a toggle, so the read-check-then-write granularity
//! of the real document stores is preserved.

mod favorite_repository;
mod follow_repository;
mod role_repository;
mod tweet_repository;
mod user_repository;

pub use favorite_repository::InMemoryFavoriteRepository;
pub use follow_repository::InMemoryFollowRepository;
pub use role_repository::InMemoryRoleRepository;
pub use tweet_repository::InMemoryTweetRepository;
pub use user_repository::InMemoryUserRepository;
