pub mod categories;
pub mod comments;
pub mod profiles;
pub mod tags;
pub mod users;
pub mod works;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── User routes (registration is open, the rest require a JWT) ──
    cfg.service(
        web::scope("/users")
            .route("/register", web::post().to(users::register_user))
            .route("/me", web::get().to(users::me))
            .route("", web::get().to(users::get_users))
            .route("/{id}", web::get().to(users::get_user))
            .route("/{id}", web::delete().to(users::delete_user)),
    );

    // ── Designer profile routes ──
    cfg.service(
        web::scope("/profiles")
            .route("/me", web::get().to(profiles::my_profile))
            .route("/me", web::put().to(profiles::update_my_profile))
            .route("/{designer_id}", web::get().to(profiles::get_profile)),
    );

    // ── Work routes (reads are public, writes require a JWT) ──
    cfg.service(
        web::scope("/works")
            .route("", web::get().to(works::get_works))
            .route("", web::post().to(works::create_work))
            .route("/{id}", web::get().to(works::get_work))
            .route("/{id}", web::put().to(works::update_work))
            .route("/{id}", web::delete().to(works::delete_work))
            .route("/{id}/view", web::post().to(works::register_view))
            .route("/{work_id}/comments", web::get().to(comments::get_comments_by_work))
            .route("/designer/{designer_id}", web::get().to(works::get_works_by_designer)),
    );

    // ── Comment routes ──
    cfg.service(
        web::scope("/comments")
            .route("", web::post().to(comments::create_comment))
            .route("/{id}", web::get().to(comments::get_comment))
            .route("/{id}", web::put().to(comments::update_comment))
            .route("/{id}", web::delete().to(comments::delete_comment)),
    );

    // ── Category and tag routes ──
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(categories::get_categories))
            .route("", web::post().to(categories::create_category)),
    );
    cfg.service(
        web::scope("/tags")
            .route("", web::get().to(tags::get_tags))
            .route("", web::post().to(tags::create_tag)),
    );
}
