use crate::{AppState, handlers, pages};
use axum::{Router, routing::get};

/// Protected Router Module
///
/// Routes under `/profile` and `/dashboard`. Handlers here rely on the access
/// gate having run: it attaches the caller's `Identity` as a request extension
/// and only lets `user` into `/profile` and `admin` into `/dashboard`.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        // GET /profile
        // The traveller area (role = "user").
        .route("/profile", get(pages::profile))
        // GET /dashboard
        // The agency dashboard shell (role = "admin").
        .route("/dashboard", get(pages::dashboard))
        // GET /dashboard/summary
        // JSON counts behind the dashboard shell.
        .route("/dashboard/summary", get(handlers::get_dashboard_summary))
}
