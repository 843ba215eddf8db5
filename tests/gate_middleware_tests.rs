use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use std::sync::Arc;
use tower::ServiceExt;
use travel_agency_site::{AppConfig, AppState, StaticCatalog, create_router};

// --- Test Utilities ---

const ADMIN_COOKIE: &str = "user=%7B%22role%22%3A%22admin%22%2C%22name%22%3A%22Ana%22%7D";
const USER_COOKIE: &str = "user=%7B%22role%22%3A%22user%22%2C%22name%22%3A%22%3Cb%3EBo%3C%2Fb%3E%22%7D";

fn app_with(config: AppConfig) -> axum::Router {
    create_router(AppState {
        content: Arc::new(StaticCatalog::new()),
        config,
    })
}

fn app() -> axum::Router {
    app_with(AppConfig::default())
}

async fn get(app: axum::Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::HOST, "travel.test");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// --- Scenarios ---

#[tokio::test]
async fn test_dashboard_subpath_without_cookie_redirects_to_login() {
    let response = get(app(), "/dashboard/settings", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://travel.test/login");
}

#[tokio::test]
async fn test_profile_with_admin_cookie_redirects_to_dashboard() {
    let response = get(app(), "/profile", Some(ADMIN_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://travel.test/dashboard");
}

#[tokio::test]
async fn test_dashboard_with_admin_cookie_passes_through() {
    let response = get(app(), "/dashboard", Some(ADMIN_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Signed in as Ana"));
}

#[tokio::test]
async fn test_profile_with_undecodable_cookie_redirects_to_login() {
    let response = get(app(), "/profile/edit", Some("user=not-json")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://travel.test/login");
}

#[tokio::test]
async fn test_home_passes_through_with_or_without_cookie() {
    for cookie in [None, Some(ADMIN_COOKIE), Some(USER_COOKIE), Some("user=%%%")] {
        let response = get(app(), "/", cookie).await;
        assert_eq!(response.status(), StatusCode::OK, "cookie {cookie:?}");
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}

// --- Remaining table cells ---

#[tokio::test]
async fn test_profile_with_user_cookie_renders_escaped_name() {
    let response = get(app(), "/profile", Some(USER_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Welcome back, &lt;b&gt;Bo&lt;/b&gt;"));
    assert!(!body.contains("<b>Bo</b>"));
}

#[tokio::test]
async fn test_dashboard_with_user_cookie_redirects_to_profile() {
    let response = get(app(), "/dashboard/summary", Some(USER_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://travel.test/profile");
}

#[tokio::test]
async fn test_profile_without_cookie_redirects_to_login() {
    let response = get(app(), "/profile", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "http://travel.test/login");
}

#[tokio::test]
async fn test_admin_on_unknown_dashboard_subpath_gets_not_found() {
    let response = get(app(), "/dashboard/settings", Some(ADMIN_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_similar_prefix_is_not_gated() {
    let response = get(app(), "/profiles", None).await;

    // Falls through to the router's 404 instead of being redirected.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_summary_json_for_admin() {
    let response = get(app(), "/dashboard/summary", Some(ADMIN_COOKIE)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["packages"], 5);
    assert_eq!(json["featured_packages"], 3);
    assert_eq!(json["viewer"], "Ana");
}

#[tokio::test]
async fn test_cookie_among_others_is_found() {
    let cookie = format!("theme=dark; {}; lang=en", ADMIN_COOKIE);
    let response = get(app(), "/dashboard", Some(cookie.as_str())).await;

    assert_eq!(response.status(), StatusCode::OK);
}

// --- Redirect origin ---

#[tokio::test]
async fn test_forwarded_proto_is_used_for_redirect_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .header(header::HOST, "travel.test")
                .header("x-forwarded-proto", "https")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(location(&response), "https://travel.test/login");
}

#[tokio::test]
async fn test_configured_public_origin_wins_over_host() {
    let config = AppConfig {
        public_origin: Some("https://www.horizon.travel".to_string()),
        ..AppConfig::default()
    };
    let response = get(app_with(config), "/profile", None).await;

    assert_eq!(location(&response), "https://www.horizon.travel/login");
}

#[tokio::test]
async fn test_redirect_without_host_uses_bare_path() {
    let response = app()
        .oneshot(Request::builder().uri("/profile").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_custom_cookie_name_is_honoured() {
    let config = AppConfig {
        identity_cookie: "session_user".to_string(),
        ..AppConfig::default()
    };

    // The default name is ignored once another one is configured.
    let response = get(app_with(config.clone()), "/dashboard", Some(ADMIN_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let renamed = ADMIN_COOKIE.replacen("user=", "session_user=", 1);
    let response = get(app_with(config), "/dashboard", Some(renamed.as_str())).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_gate_never_sets_cookies() {
    for (uri, cookie) in [
        ("/profile", None),
        ("/profile", Some(ADMIN_COOKIE)),
        ("/dashboard", Some(ADMIN_COOKIE)),
        ("/dashboard", Some("user=garbage")),
    ] {
        let response = get(app(), uri, cookie).await;
        assert!(response.headers().get(header::SET_COOKIE).is_none(), "{uri}");
    }
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = get(app(), "/dashboard", None).await;

    assert!(response.headers().get("x-request-id").is_some());
}
