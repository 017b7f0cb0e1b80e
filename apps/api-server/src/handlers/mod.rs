//! HTTP handlers and route configuration.

mod auth;
mod collaborations;
mod events;
mod health;
mod jobs;
mod posts;
mod profile;

use std::sync::Arc;

use actix_web::web;

use cinecraft_core::ports::RateLimiter;

use crate::middleware::rate_limit::RateLimitMiddleware;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, auth_limiter: Arc<dyn RateLimiter>) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Credential routes, rate limited per client IP
            .service(
                web::scope("/auth")
                    .wrap(RateLimitMiddleware::new(auth_limiter))
                    .route("/signup", web::post().to(auth::signup))
                    .route("/signin", web::post().to(auth::signin)),
            )
            // Posts
            .service(
                web::scope("/posts")
                    .route("/create", web::post().to(posts::create))
                    .route("/feed", web::get().to(posts::feed))
                    .route("/{post_id}/like", web::post().to(posts::like)),
            )
            // Jobs
            .service(
                web::scope("/jobs")
                    .route("", web::get().to(jobs::list))
                    .route("/create", web::post().to(jobs::create))
                    .route("/{job_id}/apply", web::post().to(jobs::apply)),
            )
            // Collaborations
            .service(
                web::scope("/collaborations")
                    .route("", web::get().to(collaborations::list))
                    .route("/create", web::post().to(collaborations::create))
                    .route("/{collaboration_id}/join", web::post().to(collaborations::join)),
            )
            // Events
            .service(
                web::scope("/events")
                    .route("", web::get().to(events::list))
                    .route("/create", web::post().to(events::create))
                    .route("/{event_id}/rsvp", web::post().to(events::rsvp)),
            )
            // Profile
            .route("/profile/update", web::post().to(profile::update)),
    );
}
