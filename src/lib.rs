use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
    middleware,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod catalog;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod pages;

// Routes grouped by audience (public, protected).
pub mod routes;
use routes::{protected, public};

// --- Public Re-exports ---

pub use catalog::{ContentRepository, ContentState, StaticCatalog};
pub use config::AppConfig;
pub use gate::{GateDecision, Identity, RedirectTarget, Role};

/// ApiDoc
///
/// OpenAPI document for the JSON endpoints, served at `/api-docs/openapi.json`
/// and browsable at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_home, handlers::get_packages, handlers::get_package,
        handlers::get_testimonials, handlers::get_gallery, handlers::get_destinations,
        handlers::get_services, handlers::get_team, handlers::get_legal,
        handlers::get_dashboard_summary
    ),
    components(
        schemas(
            models::TravelPackage, models::Testimonial, models::GalleryImage,
            models::Destination, models::Service, models::TeamMember, models::LegalKind,
            models::LegalSection, models::LegalDocument, models::HomePage,
            models::DashboardSummary,
        )
    ),
    tags(
        (name = "travel-agency-site", description = "Travel agency site content API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Immutable state shared by every request: the content catalog and the loaded
/// configuration.
#[derive(Clone)]
pub struct AppState {
    /// Read-only site content.
    pub content: ContentState,
    /// The loaded environment configuration.
    pub config: AppConfig,
}

impl FromRef<AppState> for ContentState {
    fn from_ref(app_state: &AppState) -> ContentState {
        app_state.content.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles every route, puts the access gate in front of them and wraps the
/// result in the request-id, tracing and CORS layers.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");
    let gate_config = state.config.clone();

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .merge(protected::protected_routes())
        .fallback(pages::not_found)
        .with_state(state)
        // `layer` rather than `route_layer`: protected sub-paths with no route
        // (e.g. `/dashboard/settings`) must still be gated before they 404.
        .layer(middleware::from_fn_with_state(gate_config, gate::access_gate));

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span maker for `TraceLayer`: method, URI and the `x-request-id` set by
/// `SetRequestIdLayer`, so every log line of a request shares one id.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
