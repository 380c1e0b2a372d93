use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::StoreError;
use crate::db::users as user_db;
use crate::models::ListQuery;
use crate::models::users::{RegisterUser, Roles};

/// POST /api/users/register — create an account (no auth required).
pub async fn register_user(
    db: web::Data<DatabaseConnection>,
    body: web::Json<RegisterUser>,
) -> impl Responder {
    let input = body.into_inner();

    match user_db::get_user_by_email(db.get_ref(), &input.email).await {
        Ok(Some(_)) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Email already registered",
            }));
        }
        Ok(None) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match user_db::register_user(db.get_ref(), input).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(StoreError::Conflict(msg)) => HttpResponse::Conflict().json(serde_json::json!({
            "error": msg,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to register user: {e}"),
        })),
    }
}

/// GET /api/users/me — the authenticated user's own record.
pub async fn me(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(user.0)
}

/// GET /api/users — list users (requires authentication).
pub async fn get_users(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match user_db::get_users(db.get_ref(), query.skip(), query.limit()).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch users: {e}"),
        })),
    }
}

/// GET /api/users/{id} — get a single user (requires authentication).
pub async fn get_user(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match user_db::get_user_by_id(db.get_ref(), id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("User {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// DELETE /api/users/{id} — remove a user (admins only).
pub async fn delete_user(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if user.0.role != Roles::Admin {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only admins can delete users",
        }));
    }

    let id = path.into_inner();
    match user_db::delete_user(db.get_ref(), id).await {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(StoreError::NotFound { .. }) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("User {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete user: {e}"),
        })),
    }
}
