//! User graph domain service.
//!
//! Orchestrates signup, follow toggling, and owner-checked profile mutations
//! over the user store, follow-edge store, role lookup, and password hasher.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::DomainResult;
use crate::domain::error::Error;
use crate::domain::follow::Follow;
use crate::domain::ports::{
    FollowRepository, PasswordHasher, RoleRepository, StoreError, UserRepository,
};
use crate::domain::user::{User, UserId, Username};
use crate::domain::validator::validate_user_action;

fn map_user_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        StoreError::Query { message } => Error::internal(format!("user store error: {message}")),
    }
}

fn map_follow_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("follow edge store unavailable: {message}"))
        }
        StoreError::Query { message } => {
            Error::internal(format!("follow edge store error: {message}"))
        }
    }
}

fn map_role_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => {
            Error::service_unavailable(format!("role store unavailable: {message}"))
        }
        StoreError::Query { message } => Error::internal(format!("role store error: {message}")),
    }
}

/// Service orchestrating user reads, signup, and graph mutations.
#[derive(Clone)]
pub struct UserGraphService<U, F, R, H> {
    user_repo: Arc<U>,
    follow_repo: Arc<F>,
    role_repo: Arc<R>,
    password_hasher: Arc<H>,
}

impl<U, F, R, H> UserGraphService<U, F, R, H> {
    /// Create a new service over the user store, follow-edge store, role
    /// lookup, and password hasher.
    pub fn new(
        user_repo: Arc<U>,
        follow_repo: Arc<F>,
        role_repo: Arc<R>,
        password_hasher: Arc<H>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            role_repo,
            password_hasher,
        }
    }
}

impl<U, F, R, H> UserGraphService<U, F, R, H>
where
    U: UserRepository,
    F: FollowRepository,
    R: RoleRepository,
    H: PasswordHasher,
{
    /// List every stored user.
    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.user_repo
            .find_all()
            .await
            .map_err(map_user_store_error)
    }

    /// Fetch a user by id.
    pub async fn find_by_id(&self, user_id: &UserId) -> DomainResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))
    }

    /// Fetch a user by unique username.
    pub async fn find_by_username(&self, username: &Username) -> DomainResult<User> {
        self.user_repo
            .find_by_username(username)
            .await
            .map_err(map_user_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {username} not found")))
    }

    /// List the users following `followed_user_id`.
    pub async fn find_all_followers(&self, followed_user_id: &UserId) -> DomainResult<Vec<User>> {
        let follows = self
            .follow_repo
            .find_all_by_followed_user_id(followed_user_id)
            .await
            .map_err(map_follow_store_error)?;

        let mut followers = Vec::with_capacity(follows.len());
        for follow in follows {
            followers.push(self.find_by_id(&follow.follower_user_id).await?);
        }
        Ok(followers)
    }

    /// List the users `follower_user_id` follows.
    pub async fn find_all_following(&self, follower_user_id: &UserId) -> DomainResult<Vec<User>> {
        let follows = self
            .follow_repo
            .find_all_by_follower_user_id(follower_user_id)
            .await
            .map_err(map_follow_store_error)?;

        let mut following = Vec::with_capacity(follows.len());
        for follow in follows {
            following.push(self.find_by_id(&follow.followed_user_id).await?);
        }
        Ok(following)
    }

    /// Sign up a new user.
    ///
    /// Fails with a conflict when the username is already taken, leaving the
    /// store untouched. The plaintext credential is hashed through the
    /// hasher port, and every requested role name is resolved to its
    /// canonical record before anything is stored; an unknown name fails the
    /// whole signup.
    pub async fn create(&self, new_user: User) -> DomainResult<User> {
        let existing = self
            .user_repo
            .find_by_username(&new_user.username)
            .await
            .map_err(map_user_store_error)?;
        if existing.is_some() {
            return Err(Error::conflict(format!(
                "username {} is already taken",
                new_user.username
            )));
        }

        let mut user = new_user;
        user.password = self.password_hasher.encode(&user.password);

        let mut roles = BTreeSet::new();
        for requested in &user.roles {
            let role = self
                .role_repo
                .find_by_name(requested.name())
                .await
                .map_err(map_role_store_error)?
                .ok_or_else(|| Error::not_found(format!("role {} not found", requested.name())))?;
            roles.insert(role);
        }
        user.roles = roles;

        self.user_repo
            .insert(&user)
            .await
            .map_err(map_user_store_error)
    }

    /// Toggle `follower_user_id`'s follow on `followed_user_id`.
    ///
    /// When no edge exists the edge is inserted and the followed user's
    /// `followers_count` raised; when one does the edge is deleted and the
    /// counter lowered. The counter write is system-initiated and skips the
    /// ownership check applied to user-facing updates. The edge and counter
    /// writes are not wrapped in a transaction; concurrent toggles on the
    /// same user can race.
    pub async fn follow_toggle(
        &self,
        followed_user_id: &UserId,
        follower_user_id: &UserId,
    ) -> DomainResult<User> {
        let mut followed = self.find_by_id(followed_user_id).await?;

        let edge = self
            .follow_repo
            .find_by_pair(follower_user_id, followed_user_id)
            .await
            .map_err(map_follow_store_error)?;

        match edge {
            Some(follow) => {
                self.follow_repo
                    .delete_by_pair(&follow.follower_user_id, &follow.followed_user_id)
                    .await
                    .map_err(map_follow_store_error)?;
                followed.record_unfollow();
            }
            None => {
                let follow = Follow::new(follower_user_id.clone(), followed_user_id.clone());
                self.follow_repo
                    .insert(&follow)
                    .await
                    .map_err(map_follow_store_error)?;
                followed.record_follow();
            }
        }

        self.user_repo
            .save(&followed)
            .await
            .map_err(map_user_store_error)
    }

    /// Overwrite the profile of `user_id` from `new_user`.
    ///
    /// Only the currently stored owner may update; the acting identity is
    /// checked against the stored username before any field is applied. A
    /// changed username or email must not collide with another user's. The
    /// id is preserved; every other field, including counters, the role set,
    /// and the credential exactly as supplied, is taken from `new_user`.
    pub async fn update(
        &self,
        new_user: User,
        user_id: &UserId,
        acting_username: &Username,
    ) -> DomainResult<User> {
        let mut stored = self.find_by_id(user_id).await?;
        validate_user_action(acting_username.as_ref(), stored.username.as_ref())?;

        if new_user.username != stored.username {
            let holder = self
                .user_repo
                .find_by_username(&new_user.username)
                .await
                .map_err(map_user_store_error)?;
            if holder.is_some_and(|other| other.id != *user_id) {
                return Err(Error::conflict(format!(
                    "username {} is already taken",
                    new_user.username
                )));
            }
        }

        if new_user.email != stored.email {
            let holder = self
                .user_repo
                .find_by_email(&new_user.email)
                .await
                .map_err(map_user_store_error)?;
            if holder.is_some_and(|other| other.id != *user_id) {
                return Err(Error::conflict(format!(
                    "email {} is already taken",
                    new_user.email
                )));
            }
        }

        stored.username = new_user.username;
        stored.email = new_user.email;
        stored.password = new_user.password;
        stored.name = new_user.name;
        stored.gender = new_user.gender;
        stored.date_of_birth = new_user.date_of_birth;
        stored.profile_banner_url = new_user.profile_banner_url;
        stored.profile_image_url = new_user.profile_image_url;
        stored.phone_number = new_user.phone_number;
        stored.url = new_user.url;
        stored.description = new_user.description;
        stored.protected = new_user.protected;
        stored.verified = new_user.verified;
        stored.followers_count = new_user.followers_count;
        stored.following_count = new_user.following_count;
        stored.roles = new_user.roles;

        self.user_repo
            .save(&stored)
            .await
            .map_err(map_user_store_error)
    }

    /// Delete `user_id` after confirming `acting_username` is the stored
    /// owner.
    pub async fn delete_by_id(
        &self,
        user_id: &UserId,
        acting_username: &Username,
    ) -> DomainResult<()> {
        let user = self.find_by_id(user_id).await?;
        validate_user_action(acting_username.as_ref(), user.username.as_ref())?;

        self.user_repo
            .delete_by_id(user_id)
            .await
            .map_err(map_user_store_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
