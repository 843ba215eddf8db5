use crate::{AppState, handlers, pages};
use axum::{Router, routing::get};

/// Public Router Module
///
/// The marketing pages and the read-only content API. No identity is required
/// and the access gate passes these paths straight through.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for the load balancer.
        .route("/health", get(|| async { "ok" }))
        // --- Pages ---
        .route("/", get(pages::home))
        .route("/packages", get(pages::packages))
        .route("/management", get(pages::management))
        .route("/privacy-policy", get(pages::privacy_policy))
        .route("/terms", get(pages::terms))
        // GET /login
        // Where the access gate sends callers without a usable identity cookie.
        .route("/login", get(pages::login))
        // --- Content API ---
        .route("/api/home", get(handlers::get_home))
        .route("/api/packages", get(handlers::get_packages))
        .route("/api/packages/{slug}", get(handlers::get_package))
        .route("/api/testimonials", get(handlers::get_testimonials))
        .route("/api/gallery", get(handlers::get_gallery))
        .route("/api/destinations", get(handlers::get_destinations))
        .route("/api/services", get(handlers::get_services))
        .route("/api/team", get(handlers::get_team))
        .route("/api/legal/{document}", get(handlers::get_legal))
}
