//! HTTP handlers and route configuration.

mod auth;
mod colors;
mod health;
mod pictures;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/session", web::get().to(auth::session))
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout)),
            )
            // Gated on a logged-in session
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::put().to(posts::update_post)),
            )
            .route("/pictures", web::get().to(pictures::list_pictures))
            .route("/colors", web::get().to(colors::list_colors)),
    );
}
