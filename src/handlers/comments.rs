use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::StoreError;
use crate::db::comments as comment_db;
use crate::db::works as work_db;
use crate::models::ListQuery;
use crate::models::comments::{CreateComment, UpdateComment};

fn invalid_score() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "rating_score must be between 1 and 5",
    }))
}

/// GET /api/comments/{id} — a single comment with its author.
pub async fn get_comment(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match comment_db::get_comment_full(db.get_ref(), id).await {
        Ok(Some(comment)) => HttpResponse::Ok().json(comment),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Comment {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/works/{work_id}/comments — comments on a work, newest first.
pub async fn get_comments_by_work(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let work_id = path.into_inner();

    match work_db::get_work(db.get_ref(), work_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Work {work_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match comment_db::get_comments_by_work(db.get_ref(), work_id, query.skip(), query.limit()).await
    {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch comments: {e}"),
        })),
    }
}

/// POST /api/comments — leave a comment, optionally with a 1-5 rating
/// score (requires authentication).
pub async fn create_comment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateComment>,
) -> impl Responder {
    let input = body.into_inner();

    if let Some(score) = input.rating_score {
        if !(1..=5).contains(&score) {
            return invalid_score();
        }
    }

    match comment_db::create_comment(db.get_ref(), user.0.id, input).await {
        Ok(comment) => HttpResponse::Created().json(comment),
        Err(StoreError::NotFound { entity, id }) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("{entity} {id} not found"),
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create comment: {e}"),
        })),
    }
}

/// PUT /api/comments/{id} — edit a comment (author only). Sending
/// `"rating_score": null` clears the score; omitting it leaves the
/// score untouched.
pub async fn update_comment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateComment>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    if let Some(Some(score)) = input.rating_score {
        if !(1..=5).contains(&score) {
            return invalid_score();
        }
    }

    if let Err(resp) = authorization::verify_comment_author(db.get_ref(), id, &user.0).await {
        return resp;
    }

    match comment_db::update_comment(db.get_ref(), id, input).await {
        Ok(comment) => HttpResponse::Ok().json(comment),
        Err(StoreError::NotFound { .. }) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Comment {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update comment: {e}"),
        })),
    }
}

/// DELETE /api/comments/{id} — remove a comment (author, admin or moderator).
pub async fn delete_comment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(resp) =
        authorization::verify_comment_author_or_moderator(db.get_ref(), id, &user.0).await
    {
        return resp;
    }

    match comment_db::delete_comment(db.get_ref(), id).await {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(StoreError::NotFound { .. }) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Comment {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete comment: {e}"),
        })),
    }
}
