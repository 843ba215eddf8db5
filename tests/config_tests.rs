use serial_test::serial;
use std::{env, panic};
use travel_agency_site::{AppConfig, config::Env};

const VARS: [&str; 5] = [
    "APP_ENV",
    "BIND_ADDR",
    "IDENTITY_COOKIE_NAME",
    "PUBLIC_ORIGIN",
    "AGENCY_NAME",
];

// --- Setup/Teardown Utilities ---

/// Runs `test` with the given variables set (and every other config variable
/// cleared), then restores the original environment.
fn run_with_env<T, R>(vars: &[(&str, &str)], test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> =
        VARS.iter().map(|&var| (var, env::var(var).ok())).collect();

    unsafe {
        for var in VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
    }

    let result = panic::catch_unwind(test);

    for (key, original_value) in originals {
        unsafe {
            match original_value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_local_defaults() {
    let config = run_with_env(&[], AppConfig::load);

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert_eq!(config.identity_cookie, "user");
    assert_eq!(config.public_origin, None);
    assert_eq!(config.agency_name, "Horizon Travel");
}

#[test]
#[serial]
fn test_overrides_are_read() {
    let config = run_with_env(
        &[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("IDENTITY_COOKIE_NAME", "session_user"),
            ("PUBLIC_ORIGIN", "https://horizon.travel/"),
            ("AGENCY_NAME", "Blue Atlas Tours"),
        ],
        AppConfig::load,
    );

    assert_eq!(config.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.identity_cookie, "session_user");
    // Trailing slash is dropped so targets can be appended directly.
    assert_eq!(config.public_origin.as_deref(), Some("https://horizon.travel"));
    assert_eq!(config.agency_name, "Blue Atlas Tours");
}

#[test]
#[serial]
fn test_blank_cookie_name_falls_back_to_default() {
    let config = run_with_env(&[("IDENTITY_COOKIE_NAME", "  ")], AppConfig::load);

    assert_eq!(config.identity_cookie, "user");
}

#[test]
#[serial]
fn test_production_requires_public_origin() {
    let result = run_with_env(&[("APP_ENV", "production")], || {
        panic::catch_unwind(AppConfig::load)
    });

    assert!(
        result.is_err(),
        "Production config loading should panic without PUBLIC_ORIGIN"
    );
}

#[test]
#[serial]
fn test_production_with_public_origin() {
    let config = run_with_env(
        &[
            ("APP_ENV", "production"),
            ("PUBLIC_ORIGIN", "https://horizon.travel"),
        ],
        AppConfig::load,
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.public_origin.as_deref(), Some("https://horizon.travel"));
}

#[test]
fn test_default_config_is_local() {
    let config = AppConfig::default();

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.identity_cookie, "user");
    assert!(config.public_origin.is_none());
}
