//! Social-graph backend library modules.
//!
//! The domain layer owns the user/tweet model, the follow and favorite edge
//! protocols, and the services that keep engagement counters in step with the
//! edge stores. Outbound adapters implement the store ports in memory and
//! provide the password hasher.

pub mod domain;
pub mod outbound;
