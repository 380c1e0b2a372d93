use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::StoreError;
use crate::db::views as view_db;
use crate::db::works as work_db;
use crate::models::ListQuery;
use crate::models::users::Roles;
use crate::models::works::{CreateWork, UpdateWork, WorkListQuery};

/// GET /api/works — browse works, newest first. `categories` narrows to
/// works linked to any of the given category ids, `tags` to any of the
/// given tag names (both comma-separated).
pub async fn get_works(
    db: web::Data<DatabaseConnection>,
    query: web::Query<WorkListQuery>,
) -> impl Responder {
    match work_db::get_works(db.get_ref(), &query).await {
        Ok(works) => HttpResponse::Ok().json(works),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch works: {e}"),
        })),
    }
}

/// GET /api/works/{id} — a single work with its designer, categories and tags.
pub async fn get_work(db: web::Data<DatabaseConnection>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match work_db::get_work_full(db.get_ref(), id).await {
        Ok(Some(work)) => HttpResponse::Ok().json(work),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Work {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/works/designer/{designer_id} — all works by one designer.
pub async fn get_works_by_designer(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let designer_id = path.into_inner();
    match work_db::get_works_by_designer(db.get_ref(), designer_id, query.skip(), query.limit())
        .await
    {
        Ok(works) => HttpResponse::Ok().json(works),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch works: {e}"),
        })),
    }
}

/// POST /api/works — publish a work (designers only).
pub async fn create_work(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateWork>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers can publish works",
        }));
    }

    match work_db::create_work(db.get_ref(), user.0.id, body.into_inner()).await {
        Ok(work) => HttpResponse::Created().json(work),
        Err(StoreError::NotFound { entity, id }) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("{entity} {id} not found"),
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create work: {e}"),
        })),
    }
}

/// PUT /api/works/{id} — update a work (owner only).
pub async fn update_work(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateWork>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(resp) = authorization::verify_work_owner(db.get_ref(), id, &user.0).await {
        return resp;
    }

    match work_db::update_work(db.get_ref(), id, body.into_inner()).await {
        Ok(work) => HttpResponse::Ok().json(work),
        Err(StoreError::NotFound { entity, id }) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("{entity} {id} not found"),
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update work: {e}"),
        })),
    }
}

/// DELETE /api/works/{id} — remove a work (owner, admin or moderator).
pub async fn delete_work(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(resp) = authorization::verify_work_owner_or_moderator(db.get_ref(), id, &user.0).await
    {
        return resp;
    }

    match work_db::delete_work(db.get_ref(), id).await {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(StoreError::NotFound { .. }) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Work {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete work: {e}"),
        })),
    }
}

/// POST /api/works/{id}/view — count a view of this work by the
/// authenticated user. Counted at most once per (work, user) pair; the
/// response says whether this call was the one that counted.
pub async fn register_view(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match view_db::register_view(db.get_ref(), id, user.0.id).await {
        Ok(counted) => HttpResponse::Ok().json(serde_json::json!({ "counted": counted })),
        Err(StoreError::NotFound { .. }) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Work {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to register view: {e}"),
        })),
    }
}
