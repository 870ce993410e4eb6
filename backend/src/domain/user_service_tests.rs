//! Tests for the user graph service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::role::Role;
use crate::domain::ports::{
    FixtureFollowRepository, FixturePasswordHasher, FixtureRoleRepository, MockFollowRepository,
    MockPasswordHasher, MockRoleRepository, MockUserRepository,
};

fn sample_user(id: &str, username: &str) -> User {
    let mut user = User::new(
        Username::new(username).expect("valid username"),
        format!("{username}@example.com"),
        "hashed",
    );
    user.id = UserId::new(id).expect("valid user id");
    user
}

fn user_id(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn username(raw: &str) -> Username {
    Username::new(raw).expect("valid username")
}

#[tokio::test]
async fn create_rejects_duplicate_username_without_insert() {
    let existing = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_username()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    user_repo.expect_insert().times(0);

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let error = service
        .create(sample_user("u2", "alice"))
        .await
        .expect_err("duplicate username is rejected");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn create_hashes_the_credential_before_storage() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));
    user_repo
        .expect_insert()
        .withf(|user: &User| user.password == "salt$digest")
        .times(1)
        .returning(|user| Ok(user.clone()));

    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_encode()
        .withf(|plaintext| plaintext == "hunter2")
        .times(1)
        .return_once(|_| "salt$digest".to_owned());

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(hasher),
    );

    let mut new_user = sample_user("u1", "alice");
    new_user.password = "hunter2".to_owned();

    let created = service.create(new_user).await.expect("signup succeeds");
    assert_eq!(created.password, "salt$digest");
}

#[tokio::test]
async fn create_resolves_requested_roles_to_canonical_records() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));
    user_repo
        .expect_insert()
        .withf(|user: &User| user.roles.contains(&Role::new("ROLE_USER")))
        .times(1)
        .returning(|user| Ok(user.clone()));

    let mut role_repo = MockRoleRepository::new();
    role_repo
        .expect_find_by_name()
        .withf(|name| name == "ROLE_USER")
        .times(1)
        .return_once(|_| Ok(Some(Role::new("ROLE_USER"))));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(role_repo),
        Arc::new(FixturePasswordHasher),
    );

    let mut new_user = sample_user("u1", "alice");
    new_user.roles.insert(Role::new("ROLE_USER"));

    let created = service.create(new_user).await.expect("signup succeeds");
    assert_eq!(created.roles.len(), 1);
}

#[tokio::test]
async fn create_with_unknown_role_is_not_found_and_inserts_nothing() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));
    user_repo.expect_insert().times(0);

    let mut role_repo = MockRoleRepository::new();
    role_repo
        .expect_find_by_name()
        .times(1)
        .return_once(|_| Ok(None));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(role_repo),
        Arc::new(FixturePasswordHasher),
    );

    let mut new_user = sample_user("u1", "alice");
    new_user.roles.insert(Role::new("ROLE_OVERLORD"));

    let error = service
        .create(new_user)
        .await
        .expect_err("unknown role is rejected");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn follow_toggle_on_missing_user_is_not_found() {
    let mut user_repo = MockUserRepository::new();
    user_repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    user_repo.expect_save().times(0);

    let mut follow_repo = MockFollowRepository::new();
    follow_repo.expect_find_by_pair().times(0);

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(follow_repo),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let error = service
        .follow_toggle(&user_id("u1"), &user_id("u2"))
        .await
        .expect_err("missing user is rejected");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn first_follow_inserts_edge_and_raises_count() {
    let followed = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(followed)));
    // System-initiated counter write: u2 is not u1 and the save still goes
    // through.
    user_repo
        .expect_save()
        .withf(|user: &User| user.followers_count == 1)
        .times(1)
        .returning(|user| Ok(user.clone()));

    let mut follow_repo = MockFollowRepository::new();
    follow_repo
        .expect_find_by_pair()
        .times(1)
        .return_once(|_, _| Ok(None));
    follow_repo
        .expect_insert()
        .withf(|follow: &Follow| {
            follow.follower_user_id.as_str() == "u2" && follow.followed_user_id.as_str() == "u1"
        })
        .times(1)
        .returning(|follow| Ok(follow.clone()));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(follow_repo),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let updated = service
        .follow_toggle(&user_id("u1"), &user_id("u2"))
        .await
        .expect("toggle succeeds");

    assert_eq!(updated.followers_count, 1);
}

#[tokio::test]
async fn second_follow_removes_edge_and_restores_count() {
    let mut followed = sample_user("u1", "alice");
    followed.followers_count = 1;

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(followed)));
    user_repo
        .expect_save()
        .withf(|user: &User| user.followers_count == 0)
        .times(1)
        .returning(|user| Ok(user.clone()));

    let mut follow_repo = MockFollowRepository::new();
    let edge = Follow::new(user_id("u2"), user_id("u1"));
    follow_repo
        .expect_find_by_pair()
        .times(1)
        .return_once(move |_, _| Ok(Some(edge)));
    follow_repo
        .expect_delete_by_pair()
        .withf(|follower, followed| follower.as_str() == "u2" && followed.as_str() == "u1")
        .times(1)
        .returning(|_, _| Ok(()));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(follow_repo),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let updated = service
        .follow_toggle(&user_id("u1"), &user_id("u2"))
        .await
        .expect("toggle succeeds");

    assert_eq!(updated.followers_count, 0);
}

#[tokio::test]
async fn update_checks_the_stored_owner_not_the_proposed_name() {
    let stored = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    user_repo.expect_save().times(0);

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    // Mallory submits a payload whose username matches her own identity;
    // authorization still follows the stored owner.
    let error = service
        .update(sample_user("u1", "mallory"), &user_id("u1"), &username("mallory"))
        .await
        .expect_err("non-owner is rejected");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn update_rejects_a_taken_username() {
    let stored = sample_user("u2", "bob");
    let holder = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    user_repo
        .expect_find_by_username()
        .withf(|proposed| proposed.as_str() == "alice")
        .times(1)
        .return_once(move |_| Ok(Some(holder)));
    user_repo.expect_save().times(0);

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let mut new_user = sample_user("u2", "alice");
    new_user.email = "bob@example.com".to_owned();

    let error = service
        .update(new_user, &user_id("u2"), &username("bob"))
        .await
        .expect_err("taken username is rejected");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn update_rejects_a_taken_email() {
    let stored = sample_user("u2", "bob");
    let holder = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    user_repo
        .expect_find_by_email()
        .withf(|proposed| proposed == "alice@example.com")
        .times(1)
        .return_once(move |_| Ok(Some(holder)));
    user_repo.expect_save().times(0);

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let mut new_user = sample_user("u2", "bob");
    new_user.email = "alice@example.com".to_owned();

    let error = service
        .update(new_user, &user_id("u2"), &username("bob"))
        .await
        .expect_err("taken email is rejected");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn update_overwrites_profile_and_preserves_id() {
    let stored = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    user_repo
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));
    user_repo
        .expect_find_by_email()
        .times(1)
        .return_once(|_| Ok(None));
    user_repo
        .expect_save()
        .withf(|user: &User| {
            user.id.as_str() == "u1"
                && user.username.as_str() == "alicia"
                && user.description.as_deref() == Some("hello")
        })
        .times(1)
        .returning(|user| Ok(user.clone()));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let mut new_user = sample_user("u9", "alicia");
    new_user.description = Some("hello".to_owned());

    let updated = service
        .update(new_user, &user_id("u1"), &username("alice"))
        .await
        .expect("update succeeds");

    assert_eq!(updated.id.as_str(), "u1");
    assert_eq!(updated.username.as_str(), "alicia");
}

#[tokio::test]
async fn delete_requires_the_stored_owner() {
    let stored = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    user_repo.expect_delete_by_id().times(0);

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let error = service
        .delete_by_id(&user_id("u1"), &username("mallory"))
        .await
        .expect_err("non-owner is rejected");

    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn delete_by_owner_removes_the_user() {
    let stored = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored)));
    user_repo
        .expect_delete_by_id()
        .withf(|id| id.as_str() == "u1")
        .times(1)
        .returning(|_| Ok(()));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    service
        .delete_by_id(&user_id("u1"), &username("alice"))
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn following_list_resolves_the_followed_endpoint() {
    let followed = sample_user("u1", "alice");

    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_by_id()
        .withf(|id| id.as_str() == "u1")
        .times(1)
        .return_once(move |_| Ok(Some(followed)));

    let mut follow_repo = MockFollowRepository::new();
    follow_repo
        .expect_find_all_by_follower_user_id()
        .withf(|follower| follower.as_str() == "u2")
        .times(1)
        .return_once(|_| Ok(vec![Follow::new(user_id("u2"), user_id("u1"))]));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(follow_repo),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let following = service
        .find_all_following(&user_id("u2"))
        .await
        .expect("listing succeeds");

    assert_eq!(following.len(), 1);
    assert_eq!(following.first().map(|user| user.username.as_str()), Some("alice"));
}

#[tokio::test]
async fn connection_failures_surface_as_service_unavailable() {
    let mut user_repo = MockUserRepository::new();
    user_repo
        .expect_find_all()
        .times(1)
        .return_once(|| Err(StoreError::connection("pool unavailable")));

    let service = UserGraphService::new(
        Arc::new(user_repo),
        Arc::new(FixtureFollowRepository),
        Arc::new(FixtureRoleRepository),
        Arc::new(FixturePasswordHasher),
    );

    let error = service
        .find_all()
        .await
        .expect_err("connection failure surfaces");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
