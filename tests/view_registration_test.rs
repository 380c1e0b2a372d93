//! View registration: a (work, user) pair counts once, and both the
//! work's and the owner's view counters move together.
//!
//! Run with: `cargo test --test view_registration_test`

mod common;

use common::{profile_of, seed_designer, seed_user, seed_work, setup_db};
use uuid::Uuid;

use designhub_backend::db::StoreError;
use designhub_backend::db::{views as view_db, works as work_db};
use designhub_backend::models::users::Roles;

#[tokio::test]
async fn test_view_counts_once_per_user() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;
    let work = seed_work(&db, designer.id, "Gallery").await;

    let counted = view_db::register_view(&db, work.id, alice.id)
        .await
        .expect("view should register");
    assert!(counted);

    let repeat = view_db::register_view(&db, work.id, alice.id)
        .await
        .expect("repeat should not error");
    assert!(!repeat);

    let stored = work_db::get_work(&db, work.id)
        .await
        .expect("lookup should succeed")
        .expect("work should exist");
    assert_eq!(stored.views_count, 1);
    assert_eq!(profile_of(&db, designer.id).await.views_count, 1);
}

#[tokio::test]
async fn test_distinct_viewers_accumulate() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;
    let bob = seed_user(&db, "bob@example.com", Roles::User).await;
    let work = seed_work(&db, designer.id, "Gallery").await;

    assert!(view_db::register_view(&db, work.id, alice.id).await.unwrap());
    assert!(view_db::register_view(&db, work.id, bob.id).await.unwrap());

    let stored = work_db::get_work(&db, work.id)
        .await
        .expect("lookup should succeed")
        .expect("work should exist");
    assert_eq!(stored.views_count, 2);
    assert_eq!(profile_of(&db, designer.id).await.views_count, 2);
}

#[tokio::test]
async fn test_profile_counter_spans_all_works() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;
    let first = seed_work(&db, designer.id, "First").await;
    let second = seed_work(&db, designer.id, "Second").await;

    assert!(view_db::register_view(&db, first.id, alice.id).await.unwrap());
    assert!(view_db::register_view(&db, second.id, alice.id).await.unwrap());

    assert_eq!(profile_of(&db, designer.id).await.views_count, 2);

    let first_stored = work_db::get_work(&db, first.id)
        .await
        .expect("lookup should succeed")
        .expect("work should exist");
    assert_eq!(first_stored.views_count, 1);
}

#[tokio::test]
async fn test_view_of_missing_work_is_an_error() {
    let db = setup_db().await;
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;

    let result = view_db::register_view(&db, Uuid::new_v4(), alice.id).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}
