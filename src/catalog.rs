use crate::models::{
    Destination, GalleryImage, LegalDocument, LegalKind, LegalSection, Service, TeamMember,
    Testimonial, TravelPackage,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// ContentRepository
///
/// Read-only source of everything the site renders. Handlers and pages only see
/// this trait (as `ContentState`), so tests can substitute a mock catalog.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn packages(&self) -> Vec<TravelPackage>;
    async fn testimonials(&self) -> Vec<Testimonial>;
    async fn gallery(&self) -> Vec<GalleryImage>;
    async fn destinations(&self) -> Vec<Destination>;
    async fn services(&self) -> Vec<Service>;
    async fn team(&self) -> Vec<TeamMember>;
    async fn legal(&self, kind: LegalKind) -> LegalDocument;

    /// Looks a package up by slug. Exact, case-sensitive match.
    async fn package(&self, slug: &str) -> Option<TravelPackage> {
        self.packages()
            .await
            .into_iter()
            .find(|package| package.slug == slug)
    }

    async fn featured_packages(&self) -> Vec<TravelPackage> {
        self.packages()
            .await
            .into_iter()
            .filter(|package| package.featured)
            .collect()
    }
}

/// ContentState
///
/// The shared handle stored in `AppState`.
pub type ContentState = Arc<dyn ContentRepository>;

/// StaticCatalog
///
/// The agency's published content, compiled into the binary.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    packages: Vec<TravelPackage>,
    testimonials: Vec<Testimonial>,
    gallery: Vec<GalleryImage>,
    destinations: Vec<Destination>,
    services: Vec<Service>,
    team: Vec<TeamMember>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            packages: packages(),
            testimonials: testimonials(),
            gallery: gallery(),
            destinations: destinations(),
            services: services(),
            team: team(),
        }
    }
}

#[async_trait]
impl ContentRepository for StaticCatalog {
    async fn packages(&self) -> Vec<TravelPackage> {
        self.packages.clone()
    }

    async fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.clone()
    }

    async fn gallery(&self) -> Vec<GalleryImage> {
        self.gallery.clone()
    }

    async fn destinations(&self) -> Vec<Destination> {
        self.destinations.clone()
    }

    async fn services(&self) -> Vec<Service> {
        self.services.clone()
    }

    async fn team(&self) -> Vec<TeamMember> {
        self.team.clone()
    }

    async fn legal(&self, kind: LegalKind) -> LegalDocument {
        match kind {
            LegalKind::Privacy => privacy_policy(),
            LegalKind::Terms => terms_of_service(),
        }
    }
}

// --- Published content ---

fn package(
    n: u128,
    slug: &str,
    title: &str,
    destination: &str,
    summary: &str,
    duration_days: u32,
    price: u32,
    highlights: &[&str],
    featured: bool,
) -> TravelPackage {
    TravelPackage {
        id: Uuid::from_u128(0x100 + n),
        slug: slug.to_string(),
        title: title.to_string(),
        destination: destination.to_string(),
        summary: summary.to_string(),
        duration_days,
        price,
        currency: "USD".to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        image: format!("/images/packages/{}.jpg", slug),
        featured,
    }
}

fn packages() -> Vec<TravelPackage> {
    vec![
        package(
            1,
            "bali-escape",
            "Bali Escape",
            "Bali, Indonesia",
            "Rice terraces, temple sunsets and five nights on the beach in Seminyak.",
            7,
            1290,
            &["Ubud rice terraces", "Uluwatu sunset temple", "Beach villa stay"],
            true,
        ),
        package(
            2,
            "swiss-alps-explorer",
            "Swiss Alps Explorer",
            "Switzerland",
            "Scenic rail across the Alps with stays in Zermatt, Interlaken and Lucerne.",
            9,
            2840,
            &["Glacier Express", "Jungfraujoch excursion", "Lake Lucerne cruise"],
            true,
        ),
        package(
            3,
            "kenya-safari",
            "Kenya Safari",
            "Maasai Mara, Kenya",
            "Game drives in the Mara during the great migration, with a Nairobi stopover.",
            6,
            2150,
            &["Daily game drives", "Tented camp", "Maasai village visit"],
            true,
        ),
        package(
            4,
            "kyoto-culture-trail",
            "Kyoto Culture Trail",
            "Kyoto, Japan",
            "Temples, tea ceremonies and a night in a traditional ryokan.",
            5,
            1680,
            &["Fushimi Inari", "Tea ceremony", "Ryokan stay"],
            false,
        ),
        package(
            5,
            "dubai-city-break",
            "Dubai City Break",
            "Dubai, UAE",
            "A long weekend of desert dunes, souks and skyline views.",
            4,
            890,
            &["Desert safari", "Burj Khalifa deck", "Dhow dinner cruise"],
            false,
        ),
    ]
}

fn testimonials() -> Vec<Testimonial> {
    [
        ("Amara Okafor", "Lagos", "Every transfer was on time and the safari guide was outstanding.", 5),
        ("James Whitfield", "Manchester", "The Swiss rail itinerary was planned to the minute. Worth every franc.", 5),
        ("Leila Haddad", "Beirut", "Great hotels, and the team sorted our visas with no fuss.", 4),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (author, location, quote, rating))| Testimonial {
        id: Uuid::from_u128(0x200 + i as u128),
        author: author.to_string(),
        location: location.to_string(),
        quote: quote.to_string(),
        rating,
    })
    .collect()
}

fn gallery() -> Vec<GalleryImage> {
    [
        ("bali-temple", "Pura Lempuyang at dawn"),
        ("matterhorn", "The Matterhorn from Gornergrat"),
        ("mara-lions", "Lions resting in the Maasai Mara"),
        ("kyoto-lanterns", "Lantern-lit alley in Gion"),
        ("dubai-dunes", "Dune bashing outside Dubai"),
        ("santorini", "Blue domes of Oia"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (file, caption))| GalleryImage {
        id: Uuid::from_u128(0x300 + i as u128),
        src: format!("/images/gallery/{}.jpg", file),
        caption: caption.to_string(),
    })
    .collect()
}

fn destinations() -> Vec<Destination> {
    [
        ("Bali", "Indonesia", "Volcanic highlands, surf beaches and a living temple culture."),
        ("Zermatt", "Switzerland", "Car-free alpine village at the foot of the Matterhorn."),
        ("Maasai Mara", "Kenya", "Savannah reserve famous for the annual wildebeest migration."),
        ("Kyoto", "Japan", "Former imperial capital with over a thousand temples."),
        ("Santorini", "Greece", "Whitewashed cliffside towns above a flooded caldera."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, country, description))| Destination {
        id: Uuid::from_u128(0x400 + i as u128),
        name: name.to_string(),
        country: country.to_string(),
        description: description.to_string(),
        image: format!("/images/destinations/{}.jpg", name.to_lowercase().replace(' ', "-")),
    })
    .collect()
}

fn services() -> Vec<Service> {
    [
        ("Flight Booking", "Best-fare search across scheduled and charter carriers.", "plane"),
        ("Hotel Reservations", "Hand-picked stays from boutique guesthouses to resorts.", "bed"),
        ("Visa Assistance", "Document checklists and embassy appointments handled for you.", "passport"),
        ("Guided Tours", "Licensed local guides on every escorted package.", "map"),
        ("Travel Insurance", "Medical and cancellation cover arranged before departure.", "shield"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, icon))| Service {
        id: Uuid::from_u128(0x500 + i as u128),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

fn team() -> Vec<TeamMember> {
    [
        ("Sofia Marangoni", "Managing Director", "Twenty years in tour operations across Europe and East Africa."),
        ("Daniel Mensah", "Head of Operations", "Runs ground logistics, suppliers and on-trip support."),
        ("Priya Raman", "Customer Experience Lead", "Looks after every traveller from first enquiry to homecoming."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, position, bio))| TeamMember {
        id: Uuid::from_u128(0x600 + i as u128),
        name: name.to_string(),
        position: position.to_string(),
        bio: bio.to_string(),
        photo: format!("/images/team/{}.jpg", name.split(' ').next().unwrap_or(name).to_lowercase()),
    })
    .collect()
}

fn sections(items: &[(&str, &str)]) -> Vec<LegalSection> {
    items
        .iter()
        .map(|(heading, body)| LegalSection {
            heading: heading.to_string(),
            body: body.to_string(),
        })
        .collect()
}

fn privacy_policy() -> LegalDocument {
    LegalDocument {
        kind: LegalKind::Privacy,
        title: "Privacy Policy".to_string(),
        last_updated: "2024-01-15".to_string(),
        sections: sections(&[
            (
                "Information we collect",
                "Contact details, passport data and travel preferences you provide when enquiring or booking.",
            ),
            (
                "How we use it",
                "To arrange bookings with airlines, hotels and local partners, and to contact you about your trip.",
            ),
            (
                "Cookies",
                "We use a sign-in cookie to remember your account role. It holds no payment information.",
            ),
            (
                "Your rights",
                "You may request a copy of, correction to, or deletion of your personal data at any time.",
            ),
        ]),
    }
}

fn terms_of_service() -> LegalDocument {
    LegalDocument {
        kind: LegalKind::Terms,
        title: "Terms and Conditions".to_string(),
        last_updated: "2024-01-15".to_string(),
        sections: sections(&[
            (
                "Bookings",
                "A booking is confirmed once the deposit is received and a confirmation is issued.",
            ),
            (
                "Payments",
                "The balance is due 45 days before departure unless stated otherwise on the package.",
            ),
            (
                "Cancellations",
                "Cancellation charges increase as the departure date approaches; see your booking confirmation.",
            ),
            (
                "Liability",
                "We act as agent for carriers and suppliers and are not liable for their acts or omissions.",
            ),
        ]),
    }
}
