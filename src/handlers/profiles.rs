use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::profiles as profile_db;
use crate::models::profiles::UpdateProfile;
use crate::models::users::Roles;

/// GET /api/profiles/me — the authenticated designer's own profile.
pub async fn my_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers have profiles",
        }));
    }

    match profile_db::ensure_profile(db.get_ref(), user.0.id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch profile: {e}"),
        })),
    }
}

/// PUT /api/profiles/me — update the authenticated designer's profile.
///
/// Only the descriptive fields are writable here; rating and the view
/// and work counters are maintained by the store itself.
pub async fn update_my_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateProfile>,
) -> impl Responder {
    if user.0.role != Roles::Designer {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only designers have profiles",
        }));
    }

    match profile_db::update_profile_fields(db.get_ref(), user.0.id, body.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update profile: {e}"),
        })),
    }
}

/// GET /api/profiles/{designer_id} — public profile lookup.
pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let designer_id = path.into_inner();
    match profile_db::get_profile(db.get_ref(), designer_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Profile for designer {designer_id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
