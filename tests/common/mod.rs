#![allow(dead_code)]

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use uuid::Uuid;

use designhub_backend::db::{comments as comment_db, profiles as profile_db, users as user_db};
use designhub_backend::db::{run_migrations, works as work_db};
use designhub_backend::models::comments::{CommentResponse, CreateComment};
use designhub_backend::models::users::{self, RegisterUser, Roles};
use designhub_backend::models::works::{CreateWork, WorkResponse};
use designhub_backend::models::profiles;

/// Fresh in-memory database with the full schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A second pooled connection would see its own empty in-memory
    // database, so the pool is pinned to a single connection.
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    run_migrations(&db).await.expect("Failed to run migrations");

    db
}

pub async fn seed_user(db: &DatabaseConnection, email: &str, role: Roles) -> users::Model {
    user_db::register_user(
        db,
        RegisterUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            role,
        },
    )
    .await
    .expect("Failed to seed user")
}

pub async fn seed_designer(db: &DatabaseConnection, email: &str) -> users::Model {
    seed_user(db, email, Roles::Designer).await
}

/// A bare work with no categories or tags.
pub async fn seed_work(db: &DatabaseConnection, designer_id: Uuid, title: &str) -> WorkResponse {
    work_db::create_work(
        db,
        designer_id,
        CreateWork {
            title: title.to_string(),
            description: None,
            image_url: None,
            category_ids: vec![],
            tag_names: vec![],
        },
    )
    .await
    .expect("Failed to seed work")
}

pub async fn seed_comment(
    db: &DatabaseConnection,
    author_id: Uuid,
    work_id: Uuid,
    rating_score: Option<i32>,
) -> CommentResponse {
    comment_db::create_comment(
        db,
        author_id,
        CreateComment {
            work_id,
            comment_text: "Solid execution".to_string(),
            rating_score,
        },
    )
    .await
    .expect("Failed to seed comment")
}

/// The designer's profile row, which must exist.
pub async fn profile_of(db: &DatabaseConnection, designer_id: Uuid) -> profiles::Model {
    profile_db::get_profile(db, designer_id)
        .await
        .expect("Failed to fetch profile")
        .expect("Profile should exist")
}
