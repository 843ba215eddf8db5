//! Server-rendered HTML pages.
//!
//! Every page shares `layout` (header navigation + footer). Content comes from
//! the `ContentRepository`; anything taken from the request (the identity name)
//! is escaped before it is written.

use std::fmt::Write;

use axum::{Extension, extract::State, http::StatusCode, response::Html};
use chrono::{Datelike, Utc};

use crate::{
    AppState,
    config::AppConfig,
    error::AppResult,
    gate::Identity,
    handlers::{dashboard_summary, home_page},
    models::{LegalDocument, LegalKind, TravelPackage},
};

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/packages", "Packages"),
    ("/management", "Our Team"),
    ("/privacy-policy", "Privacy"),
    ("/terms", "Terms"),
    ("/login", "Sign in"),
];

/// Escapes text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(config: &AppConfig, title: &str, body: &str) -> AppResult<Html<String>> {
    let agency = escape(&config.agency_name);
    let mut page = String::new();

    write!(
        page,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{} | {}</title></head><body><header><a class=\"brand\" href=\"/\">{}</a><nav>",
        escape(title),
        agency,
        agency
    )?;
    for (href, label) in NAV {
        write!(page, "<a href=\"{}\">{}</a>", href, label)?;
    }
    write!(
        page,
        "</nav></header><main>{}</main><footer>&copy; {} {}</footer></body></html>",
        body,
        Utc::now().year(),
        agency
    )?;

    Ok(Html(page))
}

fn package_card(out: &mut String, package: &TravelPackage) -> std::fmt::Result {
    write!(
        out,
        "<article class=\"package\" id=\"{}\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3>\
         <p class=\"where\">{} &middot; {} days</p><p>{}</p><ul>",
        escape(&package.slug),
        escape(&package.image),
        escape(&package.title),
        escape(&package.title),
        escape(&package.destination),
        package.duration_days,
        escape(&package.summary)
    )?;
    for highlight in &package.highlights {
        write!(out, "<li>{}</li>", escape(highlight))?;
    }
    write!(
        out,
        "</ul><p class=\"price\">From {} {}</p></article>",
        package.price,
        escape(&package.currency)
    )
}

/// home
///
/// Hero, services, featured packages, destinations, testimonials and gallery.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let sections = home_page(state.content.as_ref()).await;
    let mut body = String::new();

    write!(
        body,
        "<section class=\"hero\"><h1>Travel further with {}</h1>\
         <p>Tailor-made holidays, escorted tours and everything in between.</p>\
         <a href=\"/packages\">Browse packages</a></section>",
        escape(&state.config.agency_name)
    )?;

    body.push_str("<section class=\"services\"><h2>What we do</h2>");
    for service in &sections.services {
        write!(
            body,
            "<div class=\"service\" data-icon=\"{}\"><h3>{}</h3><p>{}</p></div>",
            escape(&service.icon),
            escape(&service.title),
            escape(&service.description)
        )?;
    }
    body.push_str("</section><section class=\"featured\"><h2>Featured packages</h2>");
    for package in &sections.featured_packages {
        package_card(&mut body, package)?;
    }
    body.push_str("</section><section class=\"destinations\"><h2>Destinations</h2>");
    for destination in &sections.destinations {
        write!(
            body,
            "<figure><img src=\"{}\" alt=\"{}\"><figcaption><strong>{}</strong>, {}<br>{}</figcaption></figure>",
            escape(&destination.image),
            escape(&destination.name),
            escape(&destination.name),
            escape(&destination.country),
            escape(&destination.description)
        )?;
    }
    body.push_str("</section><section class=\"testimonials\"><h2>What travellers say</h2>");
    for testimonial in &sections.testimonials {
        write!(
            body,
            "<blockquote data-rating=\"{}\"><p>{}</p><cite>{}, {}</cite></blockquote>",
            testimonial.rating,
            escape(&testimonial.quote),
            escape(&testimonial.author),
            escape(&testimonial.location)
        )?;
    }
    body.push_str("</section><section class=\"gallery\"><h2>Gallery</h2>");
    for image in &sections.gallery {
        write!(
            body,
            "<figure><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>",
            escape(&image.src),
            escape(&image.caption),
            escape(&image.caption)
        )?;
    }
    body.push_str("</section>");

    layout(&state.config, "Home", &body)
}

pub async fn packages(State(state): State<AppState>) -> AppResult<Html<String>> {
    let mut body = String::from("<h1>Travel packages</h1><section class=\"packages\">");
    for package in &state.content.packages().await {
        package_card(&mut body, package)?;
    }
    body.push_str("</section>");

    layout(&state.config, "Packages", &body)
}

pub async fn management(State(state): State<AppState>) -> AppResult<Html<String>> {
    let mut body = String::from("<h1>Management team</h1><section class=\"team\">");
    for member in &state.content.team().await {
        write!(
            body,
            "<article class=\"member\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3><p class=\"position\">{}</p><p>{}</p></article>",
            escape(&member.photo),
            escape(&member.name),
            escape(&member.name),
            escape(&member.position),
            escape(&member.bio)
        )?;
    }
    body.push_str("</section>");

    layout(&state.config, "Management", &body)
}

fn legal_body(document: &LegalDocument) -> Result<String, std::fmt::Error> {
    let mut body = String::new();
    write!(
        body,
        "<h1>{}</h1><p class=\"updated\">Last updated {}</p>",
        escape(&document.title),
        escape(&document.last_updated)
    )?;
    for section in &document.sections {
        write!(
            body,
            "<section><h2>{}</h2><p>{}</p></section>",
            escape(&section.heading),
            escape(&section.body)
        )?;
    }
    Ok(body)
}

pub async fn privacy_policy(State(state): State<AppState>) -> AppResult<Html<String>> {
    let document = state.content.legal(LegalKind::Privacy).await;
    layout(&state.config, &document.title, &legal_body(&document)?)
}

pub async fn terms(State(state): State<AppState>) -> AppResult<Html<String>> {
    let document = state.content.legal(LegalKind::Terms).await;
    layout(&state.config, &document.title, &legal_body(&document)?)
}

/// login
///
/// Landing spot for callers bounced by the access gate. Signing in itself is
/// handled by the booking portal, which sets the identity cookie.
pub async fn login(State(state): State<AppState>) -> AppResult<Html<String>> {
    let body = "<h1>Sign in</h1>\
                <p>Please sign in through the booking portal to see your trips or the agency dashboard.</p>";
    layout(&state.config, "Sign in", body)
}

/// not_found
///
/// Router fallback. Runs after the access gate, so a gated caller only sees it
/// for protected sub-paths they are allowed into.
pub async fn not_found(State(state): State<AppState>) -> (StatusCode, AppResult<Html<String>>) {
    let body = "<h1>Page not found</h1><p><a href=\"/\">Back to the home page</a></p>";
    (StatusCode::NOT_FOUND, layout(&state.config, "Not found", body))
}

// --- Protected shells ---

/// profile
///
/// [User Route] The traveller's area. Reached only through the access gate.
pub async fn profile(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Html<String>> {
    let greeting = identity.name().map(escape).unwrap_or_else(|| "traveller".to_string());
    let mut body = String::new();
    write!(
        body,
        "<h1>Welcome back, {}</h1><section class=\"profile\">\
         <p>Your upcoming trips and saved packages will appear here.</p>\
         <a href=\"/packages\">Find your next trip</a></section>",
        greeting
    )?;

    layout(&state.config, "My profile", &body)
}

/// dashboard
///
/// [Admin Route] The agency dashboard shell with content counts.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> AppResult<Html<String>> {
    let summary = dashboard_summary(state.content.as_ref(), &identity).await;
    let mut body = String::new();

    write!(
        body,
        "<h1>Dashboard</h1><p class=\"viewer\">Signed in as {}</p><dl class=\"summary\">\
         <dt>Packages</dt><dd>{}</dd><dt>Featured</dt><dd>{}</dd>\
         <dt>Destinations</dt><dd>{}</dd><dt>Testimonials</dt><dd>{}</dd>\
         <dt>Team members</dt><dd>{}</dd></dl>",
        summary.viewer.as_deref().map(escape).unwrap_or_else(|| "admin".to_string()),
        summary.packages,
        summary.featured_packages,
        summary.destinations,
        summary.testimonials,
        summary.team_members
    )?;

    layout(&state.config, "Dashboard", &body)
}
