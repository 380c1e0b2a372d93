use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::tags as tag_db;
use crate::models::ListQuery;
use crate::models::tags::CreateTag;

/// GET /api/tags — list tags alphabetically.
pub async fn get_tags(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match tag_db::get_tags(db.get_ref(), query.skip(), query.limit()).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch tags: {e}"),
        })),
    }
}

/// POST /api/tags — create a tag ahead of any work using it.
///
/// Tags also come into existence on demand when a work references them,
/// so this endpoint only needs a signed-in user, not a moderator.
pub async fn create_tag(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateTag>,
) -> impl Responder {
    let input = body.into_inner();

    match tag_db::get_tag_by_name(db.get_ref(), &input.name).await {
        Ok(Some(_)) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Tag already exists",
            }));
        }
        Ok(None) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match tag_db::get_or_create(db.get_ref(), &input.name).await {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create tag: {e}"),
        })),
    }
}
