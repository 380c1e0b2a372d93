use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::categories as category_db;
use crate::models::ListQuery;
use crate::models::categories::CreateCategory;

/// GET /api/categories — list categories alphabetically.
pub async fn get_categories(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match category_db::get_categories(db.get_ref(), query.skip(), query.limit()).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch categories: {e}"),
        })),
    }
}

/// POST /api/categories — create a category (admins and moderators only).
pub async fn create_category(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateCategory>,
) -> impl Responder {
    if !user.0.role.can_moderate() {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only admins and moderators can create categories",
        }));
    }

    let input = body.into_inner();

    match category_db::get_category_by_name(db.get_ref(), &input.name).await {
        Ok(Some(_)) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Category already exists",
            }));
        }
        Ok(None) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match category_db::create_category(db.get_ref(), input).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create category: {e}"),
        })),
    }
}
