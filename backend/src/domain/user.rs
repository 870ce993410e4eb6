//! User data model.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::role::Role;

/// Validation errors returned by the user identity newtypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    UntrimmedId,
    EmptyUsername,
    UntrimmedUsername,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::UntrimmedId => write!(f, "user id must not carry surrounding whitespace"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UntrimmedUsername => {
                write!(f, "username must not carry surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Opaque user identifier as issued by the user store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::UntrimmedId);
        }
        Ok(Self(id))
    }

    /// Access the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Unique handle a user signs up with and is addressed by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from borrowed input.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        if username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.trim() != username {
            return Err(UserValidationError::UntrimmedUsername);
        }
        Ok(Self(username))
    }

    /// Access the raw handle.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `followers_count` tracks the number of follow edges naming this user as
///   the followed party; only the follow-toggle protocol adjusts it, and it
///   never goes below zero.
/// - `password` holds the hashed credential, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_banner_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub phone_number: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: u32,
    pub following_count: u32,
    pub roles: BTreeSet<Role>,
}

impl User {
    /// Build a user with a freshly generated id and empty profile.
    pub fn new(username: Username, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            username,
            email: email.into(),
            password: password.into(),
            name: None,
            gender: None,
            date_of_birth: None,
            profile_banner_url: None,
            profile_image_url: None,
            phone_number: None,
            url: None,
            description: None,
            protected: false,
            verified: false,
            followers_count: 0,
            following_count: 0,
            roles: BTreeSet::new(),
        }
    }

    /// Apply a follow edge gained through the toggle protocol.
    pub fn record_follow(&mut self) {
        self.followers_count += 1;
    }

    /// Apply a follow edge removed through the toggle protocol.
    pub fn record_unfollow(&mut self) {
        self.followers_count = self.followers_count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" padded ")]
    #[case("trailing ")]
    fn user_id_rejects_invalid_input(#[case] raw: &str) {
        assert!(UserId::new(raw).is_err());
    }

    #[test]
    fn username_round_trips_through_serde() {
        let username = Username::new("alice").expect("valid username");
        let json = serde_json::to_string(&username).expect("serialise");
        let back: Username = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, username);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn new_user_starts_with_zero_counters_and_no_roles() {
        let user = User::new(
            Username::new("alice").expect("valid username"),
            "alice@example.com",
            "hunter2",
        );
        assert_eq!(user.followers_count, 0);
        assert_eq!(user.following_count, 0);
        assert!(user.roles.is_empty());
        assert!(!user.verified);
    }

    #[test]
    fn unfollow_saturates_at_zero() {
        let mut user = User::new(
            Username::new("alice").expect("valid username"),
            "alice@example.com",
            "hunter2",
        );
        user.record_unfollow();
        assert_eq!(user.followers_count, 0);

        user.record_follow();
        user.record_follow();
        user.record_unfollow();
        assert_eq!(user.followers_count, 1);
    }
}
