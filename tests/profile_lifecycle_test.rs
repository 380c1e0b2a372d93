//! Profile lifecycle: registration creates designer profiles, profile
//! creation is idempotent under races and self-heals when rows go
//! missing, partial updates never touch the derived columns, and user
//! deletion cascades to everything the user owned.
//!
//! Run with: `cargo test --test profile_lifecycle_test`

mod common;

use common::{profile_of, seed_comment, seed_designer, seed_user, seed_work, setup_db};
use sea_orm::EntityTrait;

use designhub_backend::db::StoreError;
use designhub_backend::db::{
    comments as comment_db, profiles as profile_db, users as user_db, works as work_db,
};
use designhub_backend::models::profiles::{self, UpdateProfile};
use designhub_backend::models::users::{RegisterUser, Roles};

fn empty_update() -> UpdateProfile {
    UpdateProfile {
        specialization: None,
        bio: None,
        experience: None,
        avatar_url: None,
        header_url: None,
    }
}

#[tokio::test]
async fn test_registration_creates_designer_profile() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let profile = profile_of(&db, designer.id).await;
    assert_eq!(profile.rating, 0.0);
    assert_eq!(profile.views_count, 0);
    assert_eq!(profile.work_amount, 0);
    assert!(profile.specialization.is_none());

    // Non-designers do not get one.
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;
    let none = profile_db::get_profile(&db, alice.id)
        .await
        .expect("lookup should succeed");
    assert!(none.is_none());
}

#[tokio::test]
async fn test_ensure_profile_is_idempotent() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let mut update = empty_update();
    update.bio = Some("Ten years of brand work".to_string());
    profile_db::update_profile_fields(&db, designer.id, update)
        .await
        .expect("update should succeed");

    // A second ensure must return the existing row, not a blank one.
    let ensured = profile_db::ensure_profile(&db, designer.id)
        .await
        .expect("ensure should succeed");
    assert_eq!(ensured.bio.as_deref(), Some("Ten years of brand work"));
}

#[tokio::test]
async fn test_update_creates_missing_profile() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    profiles::Entity::delete_by_id(designer.id)
        .exec(&db)
        .await
        .expect("delete should succeed");

    let mut update = empty_update();
    update.specialization = Some("Illustration".to_string());
    let profile = profile_db::update_profile_fields(&db, designer.id, update)
        .await
        .expect("update should succeed");

    assert_eq!(profile.specialization.as_deref(), Some("Illustration"));
    assert_eq!(profile.rating, 0.0);
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let mut first = empty_update();
    first.bio = Some("Posters and packaging".to_string());
    first.experience = Some(7);
    profile_db::update_profile_fields(&db, designer.id, first)
        .await
        .expect("update should succeed");

    let mut second = empty_update();
    second.specialization = Some("Print".to_string());
    let profile = profile_db::update_profile_fields(&db, designer.id, second)
        .await
        .expect("update should succeed");

    assert_eq!(profile.bio.as_deref(), Some("Posters and packaging"));
    assert_eq!(profile.experience, 7);
    assert_eq!(profile.specialization.as_deref(), Some("Print"));
    assert_eq!(profile.rating, 0.0);
    assert_eq!(profile.work_amount, 0);
}

#[tokio::test]
async fn test_empty_update_is_a_no_op() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let profile = profile_db::update_profile_fields(&db, designer.id, empty_update())
        .await
        .expect("update should succeed");
    assert_eq!(profile.designer_id, designer.id);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let db = setup_db().await;
    seed_designer(&db, "taken@example.com").await;

    let result = user_db::register_user(
        &db,
        RegisterUser {
            first_name: "Other".to_string(),
            last_name: "Person".to_string(),
            email: "taken@example.com".to_string(),
            role: Roles::User,
        },
    )
    .await;

    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn test_user_deletion_cascades() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;
    let work = seed_work(&db, designer.id, "Showcase").await;
    let comment = seed_comment(&db, alice.id, work.id, None).await;

    // Deleting a commenter takes their comments with them.
    user_db::delete_user(&db, alice.id)
        .await
        .expect("delete should succeed");
    assert!(
        comment_db::get_comment(&db, comment.id)
            .await
            .expect("lookup should succeed")
            .is_none()
    );

    // Deleting a designer takes their works and profile with them.
    user_db::delete_user(&db, designer.id)
        .await
        .expect("delete should succeed");
    assert!(
        work_db::get_work(&db, work.id)
            .await
            .expect("lookup should succeed")
            .is_none()
    );
    assert!(
        profile_db::get_profile(&db, designer.id)
            .await
            .expect("lookup should succeed")
            .is_none()
    );
}
