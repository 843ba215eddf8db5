use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Site Content Schemas ---

/// TravelPackage
///
/// A bookable tour offered on the packages page. Prices are whole units of
/// `currency` per traveller.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct TravelPackage {
    pub id: Uuid,
    // URL-safe identifier used by `/api/packages/{slug}`.
    pub slug: String,
    pub title: String,
    pub destination: String,
    pub summary: String,
    pub duration_days: u32,
    pub price: u32,
    pub currency: String,
    pub highlights: Vec<String>,
    pub image: String,
    // Featured packages are promoted on the home page.
    pub featured: bool,
}

/// Testimonial
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct Testimonial {
    pub id: Uuid,
    pub author: String,
    pub location: String,
    pub quote: String,
    /// 1 to 5 stars.
    pub rating: u8,
}

/// GalleryImage
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct GalleryImage {
    pub id: Uuid,
    pub src: String,
    pub caption: String,
}

/// Destination
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image: String,
}

/// Service
///
/// One of the agency's offerings listed in the services section (flights,
/// visas, hotel bookings, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// TeamMember
///
/// A member of the management team page.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub photo: String,
}

/// LegalKind
///
/// The two legal documents the site publishes. Serialized in the lowercase form
/// used by `/api/legal/{document}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LegalKind {
    Privacy,
    Terms,
}

impl LegalKind {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "privacy" => Some(LegalKind::Privacy),
            "terms" => Some(LegalKind::Terms),
            _ => None,
        }
    }
}

/// LegalSection
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default, PartialEq)]
#[ts(export)]
pub struct LegalSection {
    pub heading: String,
    pub body: String,
}

/// LegalDocument
///
/// Privacy policy or terms of service, rendered as ordered sections.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct LegalDocument {
    pub kind: LegalKind,
    pub title: String,
    pub last_updated: String,
    pub sections: Vec<LegalSection>,
}

// --- Aggregates ---

/// HomePage
///
/// Everything the landing page renders, in section order.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct HomePage {
    pub services: Vec<Service>,
    pub featured_packages: Vec<TravelPackage>,
    pub destinations: Vec<Destination>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<GalleryImage>,
}

/// DashboardSummary
///
/// Content counts shown on the admin dashboard shell.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct DashboardSummary {
    pub packages: u32,
    pub featured_packages: u32,
    pub destinations: u32,
    pub testimonials: u32,
    pub team_members: u32,
    // Display name from the identity cookie, when the record carried one.
    pub viewer: Option<String>,

    #[ts(type = "string")]
    pub generated_at: DateTime<Utc>,
}
