//! Work creation, update and deletion, and the profile bookkeeping that
//! rides along with them: the `work_amount` counter, on-demand tags,
//! strict category references and cascade cleanup.
//!
//! Run with: `cargo test --test work_lifecycle_test`

mod common;

use common::{profile_of, seed_comment, seed_designer, seed_user, seed_work, setup_db};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use designhub_backend::db::StoreError;
use designhub_backend::db::{
    categories as category_db, comments as comment_db, tags as tag_db, views as view_db,
    works as work_db,
};
use designhub_backend::models::categories::CreateCategory;
use designhub_backend::models::users::Roles;
use designhub_backend::models::works::{CreateWork, UpdateWork, WorkListQuery};
use designhub_backend::models::{profiles, work_views};

fn bare_work(title: &str) -> CreateWork {
    CreateWork {
        title: title.to_string(),
        description: None,
        image_url: None,
        category_ids: vec![],
        tag_names: vec![],
    }
}

fn no_filters() -> WorkListQuery {
    WorkListQuery {
        skip: None,
        limit: None,
        categories: None,
        tags: None,
    }
}

#[tokio::test]
async fn test_work_amount_tracks_creates_and_deletes() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let first = seed_work(&db, designer.id, "First").await;
    seed_work(&db, designer.id, "Second").await;
    assert_eq!(profile_of(&db, designer.id).await.work_amount, 2);

    work_db::delete_work(&db, first.id)
        .await
        .expect("delete should succeed");
    assert_eq!(profile_of(&db, designer.id).await.work_amount, 1);
}

#[tokio::test]
async fn test_work_amount_never_goes_negative() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;
    let work = seed_work(&db, designer.id, "Solo piece").await;

    // Force the counter out of sync to prove deletion clamps at zero.
    let mut active: profiles::ActiveModel = profile_of(&db, designer.id).await.into();
    active.work_amount = Set(0);
    active.update(&db).await.expect("update should succeed");

    work_db::delete_work(&db, work.id)
        .await
        .expect("delete should succeed");
    assert_eq!(profile_of(&db, designer.id).await.work_amount, 0);
}

#[tokio::test]
async fn test_tags_are_created_on_demand_and_shared() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let mut first_input = bare_work("Poster");
    first_input.tag_names = vec!["print".to_string(), "minimal".to_string()];
    let first = work_db::create_work(&db, designer.id, first_input)
        .await
        .expect("create should succeed");

    let mut second_input = bare_work("Flyer");
    second_input.tag_names = vec!["print".to_string()];
    let second = work_db::create_work(&db, designer.id, second_input)
        .await
        .expect("create should succeed");

    let first_print = first
        .tags
        .iter()
        .find(|tag| tag.name == "print")
        .expect("tag should be linked");
    let second_print = second
        .tags
        .iter()
        .find(|tag| tag.name == "print")
        .expect("tag should be linked");
    assert_eq!(first_print.id, second_print.id);

    let all_tags = tag_db::get_tags(&db, 0, 100).await.expect("list should succeed");
    assert_eq!(all_tags.len(), 2);

    let looked_up = tag_db::get_tag_by_name(&db, "print")
        .await
        .expect("lookup should succeed")
        .expect("tag should exist");
    assert_eq!(looked_up.id, first_print.id);
}

#[tokio::test]
async fn test_unknown_category_rejects_creation() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let mut input = bare_work("Orphan");
    input.category_ids = vec![Uuid::new_v4()];

    let result = work_db::create_work(&db, designer.id, input).await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));

    // Nothing was written.
    assert_eq!(profile_of(&db, designer.id).await.work_amount, 0);
    let works = work_db::get_works(&db, &no_filters())
        .await
        .expect("list should succeed");
    assert!(works.is_empty());
}

#[tokio::test]
async fn test_update_replaces_link_sets_wholesale() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let art = category_db::create_category(&db, CreateCategory { name: "Art".to_string() })
        .await
        .expect("create should succeed");
    let web = category_db::create_category(&db, CreateCategory { name: "Web".to_string() })
        .await
        .expect("create should succeed");

    let mut input = bare_work("Landing page");
    input.category_ids = vec![art.id];
    input.tag_names = vec!["sketch".to_string()];
    let work = work_db::create_work(&db, designer.id, input)
        .await
        .expect("create should succeed");

    let updated = work_db::update_work(
        &db,
        work.id,
        UpdateWork {
            title: None,
            description: None,
            image_url: None,
            category_ids: Some(vec![web.id]),
            tag_names: Some(vec!["render".to_string(), "detail".to_string()]),
        },
    )
    .await
    .expect("update should succeed");

    assert_eq!(updated.categories.len(), 1);
    assert_eq!(updated.categories[0].name, "Web");

    let mut tag_names: Vec<&str> = updated.tags.iter().map(|tag| tag.name.as_str()).collect();
    tag_names.sort();
    assert_eq!(tag_names, vec!["detail", "render"]);
}

#[tokio::test]
async fn test_field_update_keeps_links() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let mut input = bare_work("Icons");
    input.tag_names = vec!["vector".to_string()];
    let work = work_db::create_work(&db, designer.id, input)
        .await
        .expect("create should succeed");

    let updated = work_db::update_work(
        &db,
        work.id,
        UpdateWork {
            title: Some("Icon set".to_string()),
            description: None,
            image_url: None,
            category_ids: None,
            tag_names: None,
        },
    )
    .await
    .expect("update should succeed");

    assert_eq!(updated.title, "Icon set");
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].name, "vector");
}

#[tokio::test]
async fn test_delete_cascades_to_comments_and_views() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;
    let alice = seed_user(&db, "alice@example.com", Roles::User).await;
    let work = seed_work(&db, designer.id, "Showcase").await;

    let comment = seed_comment(&db, alice.id, work.id, Some(4)).await;
    view_db::register_view(&db, work.id, alice.id)
        .await
        .expect("view should register");

    work_db::delete_work(&db, work.id)
        .await
        .expect("delete should succeed");

    assert!(
        comment_db::get_comment(&db, comment.id)
            .await
            .expect("lookup should succeed")
            .is_none()
    );
    assert!(
        work_views::Entity::find_by_id((work.id, alice.id))
            .one(&db)
            .await
            .expect("lookup should succeed")
            .is_none()
    );
}

#[tokio::test]
async fn test_list_filters_by_category_and_tag() {
    let db = setup_db().await;
    let designer = seed_designer(&db, "designer@example.com").await;

    let art = category_db::create_category(&db, CreateCategory { name: "Art".to_string() })
        .await
        .expect("create should succeed");
    let web = category_db::create_category(&db, CreateCategory { name: "Web".to_string() })
        .await
        .expect("create should succeed");

    let mut painting = bare_work("Painting");
    painting.category_ids = vec![art.id];
    painting.tag_names = vec!["print".to_string()];
    work_db::create_work(&db, designer.id, painting)
        .await
        .expect("create should succeed");

    let mut site = bare_work("Site");
    site.category_ids = vec![web.id];
    site.tag_names = vec!["neon".to_string()];
    work_db::create_work(&db, designer.id, site)
        .await
        .expect("create should succeed");

    let everything = work_db::get_works(&db, &no_filters())
        .await
        .expect("list should succeed");
    assert_eq!(everything.len(), 2);

    let mut by_category = no_filters();
    by_category.categories = Some(art.id.to_string());
    let hits = work_db::get_works(&db, &by_category)
        .await
        .expect("list should succeed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Painting");

    let mut by_tag = no_filters();
    by_tag.tags = Some("neon".to_string());
    let hits = work_db::get_works(&db, &by_tag)
        .await
        .expect("list should succeed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Site");

    let mut mismatch = no_filters();
    mismatch.categories = Some(art.id.to_string());
    mismatch.tags = Some("neon".to_string());
    let hits = work_db::get_works(&db, &mismatch)
        .await
        .expect("list should succeed");
    assert!(hits.is_empty());
}
