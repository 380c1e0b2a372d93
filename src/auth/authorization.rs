use actix_web::HttpResponse;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::comments as comment_db;
use crate::db::works as work_db;
use crate::models::{comments, users, works};

pub async fn verify_work_owner(
    db: &DatabaseConnection,
    work_id: Uuid,
    user: &users::Model,
) -> Result<works::Model, HttpResponse> {
    let work = load_work(db, work_id).await?;

    if work.designer_id != user.id {
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You do not own this work",
        })));
    }

    Ok(work)
}

pub async fn verify_work_owner_or_moderator(
    db: &DatabaseConnection,
    work_id: Uuid,
    user: &users::Model,
) -> Result<works::Model, HttpResponse> {
    let work = load_work(db, work_id).await?;

    if work.designer_id != user.id && !user.role.can_moderate() {
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the owner or a moderator can do this",
        })));
    }

    Ok(work)
}

pub async fn verify_comment_author(
    db: &DatabaseConnection,
    comment_id: Uuid,
    user: &users::Model,
) -> Result<comments::Model, HttpResponse> {
    let comment = load_comment(db, comment_id).await?;

    if comment.author_id != user.id {
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You did not write this comment",
        })));
    }

    Ok(comment)
}

pub async fn verify_comment_author_or_moderator(
    db: &DatabaseConnection,
    comment_id: Uuid,
    user: &users::Model,
) -> Result<comments::Model, HttpResponse> {
    let comment = load_comment(db, comment_id).await?;

    if comment.author_id != user.id && !user.role.can_moderate() {
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the author or a moderator can do this",
        })));
    }

    Ok(comment)
}

async fn load_work(db: &DatabaseConnection, work_id: Uuid) -> Result<works::Model, HttpResponse> {
    match work_db::get_work(db, work_id).await {
        Ok(Some(work)) => Ok(work),
        Ok(None) => Err(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Work {work_id} not found"),
        }))),
        Err(e) => Err(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        }))),
    }
}

async fn load_comment(
    db: &DatabaseConnection,
    comment_id: Uuid,
) -> Result<comments::Model, HttpResponse> {
    match comment_db::get_comment(db, comment_id).await {
        Ok(Some(comment)) => Ok(comment),
        Ok(None) => Err(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Comment {comment_id} not found"),
        }))),
        Err(e) => Err(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        }))),
    }
}
