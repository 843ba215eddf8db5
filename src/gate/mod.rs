//! Access gate for the protected areas of the site.
//!
//! Runs in front of the router for every request. Requests to `/profile/**` and
//! `/dashboard/**` have their identity cookie decoded and are either let through
//! (with the decoded `Identity` attached as a request extension) or redirected.
//! All other paths pass untouched.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::AppConfig;

pub mod identity;
pub mod policy;

pub use identity::{Identity, Role, decode_identity, read_cookie};
pub use policy::{GateDecision, ProtectedArea, RedirectTarget, evaluate};

/// access_gate
///
/// Axum middleware wrapping the whole router (registered with
/// `middleware::from_fn_with_state`). Stateless apart from the read-only config.
pub async fn access_gate(
    State(config): State<AppConfig>,
    mut request: Request,
    next: Next,
) -> Response {
    if ProtectedArea::for_path(request.uri().path()).is_none() {
        return next.run(request).await;
    }

    let identity = decode_identity(read_cookie(request.headers(), &config.identity_cookie));

    match evaluate(request.uri().path(), &identity) {
        GateDecision::Continue => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        GateDecision::Redirect(target) => {
            let location = redirect_location(&config, request.uri(), request.headers(), target);
            tracing::debug!(
                path = %request.uri().path(),
                role = identity.role().map(|role| role.as_str()).unwrap_or("none"),
                %location,
                "access gate redirect"
            );
            temporary_redirect(&location, target)
        }
    }
}

/// redirect_location
///
/// Resolves the target path against the request origin. The configured public
/// origin wins; otherwise the origin is rebuilt from `X-Forwarded-Proto` and the
/// Host header (or the URI authority for HTTP/2). Without any host the bare path
/// is used.
pub fn redirect_location(
    config: &AppConfig,
    uri: &Uri,
    headers: &HeaderMap,
    target: RedirectTarget,
) -> String {
    match request_origin(config, uri, headers) {
        Some(origin) => format!("{}{}", origin, target.path()),
        None => target.path().to_string(),
    }
}

fn request_origin(config: &AppConfig, uri: &Uri, headers: &HeaderMap) -> Option<String> {
    if let Some(origin) = &config.public_origin {
        return Some(origin.clone());
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty() && !host.contains('/'))
        .or_else(|| uri.authority().map(|authority| authority.as_str()))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|proto| matches!(*proto, "http" | "https"))
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    Some(format!("{}://{}", scheme, host))
}

fn temporary_redirect(location: &str, target: RedirectTarget) -> Response {
    let value = HeaderValue::from_str(location)
        .unwrap_or_else(|_| HeaderValue::from_static(target.path()));
    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, value)]).into_response()
}
