use std::env;

/// Name of the cookie the login flow writes the identity record into.
pub const DEFAULT_IDENTITY_COOKIE: &str = "user";

/// AppConfig
///
/// Holds the site's entire configuration state. Loaded once at startup and
/// shared immutably through `AppState` (pulled out by handlers and the access
/// gate via `FromRef`).
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and fail-fast checks.
    pub env: Env,
    // Socket address the HTTP listener binds to.
    pub bind_addr: String,
    // Cookie carrying the URL-encoded identity record.
    pub identity_cookie: String,
    // Scheme + host used to build absolute redirect targets, e.g. `https://example.travel`.
    // When unset, the origin is derived from the request's Host header.
    pub public_origin: Option<String>,
    // Brand name rendered in the page layout.
    pub agency_name: String,
}

/// Env
///
/// Local development uses pretty logs and lenient defaults; Production demands
/// an explicit public origin and emits JSON logs.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Non-panicking configuration for tests and scaffolding.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:3000".to_string(),
            identity_cookie: DEFAULT_IDENTITY_COOKIE.to_string(),
            public_origin: None,
            agency_name: "Horizon Travel".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables.
    ///
    /// # Panics
    /// Panics in `Env::Production` when `PUBLIC_ORIGIN` is missing, so the site
    /// never starts issuing redirects to an origin taken from untrusted Host headers.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let public_origin = match env {
            Env::Production => Some(
                env::var("PUBLIC_ORIGIN").expect("FATAL: PUBLIC_ORIGIN must be set in production."),
            ),
            Env::Local => env::var("PUBLIC_ORIGIN").ok(),
        }
        .map(|origin| origin.trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty());

        Self {
            env,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            identity_cookie: env::var("IDENTITY_COOKIE_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IDENTITY_COOKIE.to_string()),
            public_origin,
            agency_name: env::var("AGENCY_NAME").unwrap_or_else(|_| "Horizon Travel".to_string()),
        }
    }
}
