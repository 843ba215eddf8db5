use crate::{
    AppState,
    catalog::ContentRepository,
    error::{AppError, AppResult},
    gate::Identity,
    models::{
        DashboardSummary, Destination, GalleryImage, HomePage, LegalDocument, LegalKind, Service,
        TeamMember, Testimonial, TravelPackage,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use chrono::Utc;

// --- Public content API ---

/// get_home
///
/// [Public Route] The landing page aggregate: services, featured packages,
/// destinations, testimonials and gallery.
#[utoipa::path(
    get,
    path = "/api/home",
    responses((status = 200, description = "Home page sections", body = HomePage))
)]
pub async fn get_home(State(state): State<AppState>) -> Json<HomePage> {
    Json(home_page(state.content.as_ref()).await)
}

/// get_packages
#[utoipa::path(
    get,
    path = "/api/packages",
    responses((status = 200, description = "All travel packages", body = [TravelPackage]))
)]
pub async fn get_packages(State(state): State<AppState>) -> Json<Vec<TravelPackage>> {
    Json(state.content.packages().await)
}

/// get_package
///
/// [Public Route] A single package by slug. Unknown slugs are a 404.
#[utoipa::path(
    get,
    path = "/api/packages/{slug}",
    params(("slug" = String, Path, description = "Package slug")),
    responses(
        (status = 200, description = "Found", body = TravelPackage),
        (status = 404, description = "No such package")
    )
)]
pub async fn get_package(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<TravelPackage>> {
    state
        .content
        .package(&slug)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("package '{}'", slug)))
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses((status = 200, description = "Customer testimonials", body = [Testimonial]))
)]
pub async fn get_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.content.testimonials().await)
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    responses((status = 200, description = "Gallery images", body = [GalleryImage]))
)]
pub async fn get_gallery(State(state): State<AppState>) -> Json<Vec<GalleryImage>> {
    Json(state.content.gallery().await)
}

#[utoipa::path(
    get,
    path = "/api/destinations",
    responses((status = 200, description = "Destinations", body = [Destination]))
)]
pub async fn get_destinations(State(state): State<AppState>) -> Json<Vec<Destination>> {
    Json(state.content.destinations().await)
}

#[utoipa::path(
    get,
    path = "/api/services",
    responses((status = 200, description = "Agency services", body = [Service]))
)]
pub async fn get_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.content.services().await)
}

#[utoipa::path(
    get,
    path = "/api/team",
    responses((status = 200, description = "Management team", body = [TeamMember]))
)]
pub async fn get_team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.content.team().await)
}

/// get_legal
///
/// [Public Route] `privacy` or `terms`; anything else is a 404.
#[utoipa::path(
    get,
    path = "/api/legal/{document}",
    params(("document" = String, Path, description = "`privacy` or `terms`")),
    responses(
        (status = 200, description = "Legal document", body = LegalDocument),
        (status = 404, description = "Unknown document")
    )
)]
pub async fn get_legal(
    State(state): State<AppState>,
    Path(document): Path<String>,
) -> AppResult<Json<LegalDocument>> {
    let kind = LegalKind::from_slug(&document)
        .ok_or_else(|| AppError::NotFound(format!("legal document '{}'", document)))?;
    Ok(Json(state.content.legal(kind).await))
}

// --- Protected API ---

/// get_dashboard_summary
///
/// [Admin Route] Content counts for the dashboard shell. Only reachable through
/// the access gate, which attaches the caller's `Identity`.
#[utoipa::path(
    get,
    path = "/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary),
        (status = 307, description = "Redirected by the access gate")
    )
)]
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Json<DashboardSummary> {
    Json(dashboard_summary(state.content.as_ref(), &identity).await)
}

// --- Shared builders (also used by the HTML pages) ---

pub async fn home_page(content: &dyn ContentRepository) -> HomePage {
    HomePage {
        services: content.services().await,
        featured_packages: content.featured_packages().await,
        destinations: content.destinations().await,
        testimonials: content.testimonials().await,
        gallery: content.gallery().await,
    }
}

pub async fn dashboard_summary(
    content: &dyn ContentRepository,
    identity: &Identity,
) -> DashboardSummary {
    let packages = content.packages().await;
    let featured = packages.iter().filter(|package| package.featured).count();

    DashboardSummary {
        packages: packages.len() as u32,
        featured_packages: featured as u32,
        destinations: content.destinations().await.len() as u32,
        testimonials: content.testimonials().await.len() as u32,
        team_members: content.team().await.len() as u32,
        viewer: identity.name().map(str::to_string),
        generated_at: Utc::now(),
    }
}
