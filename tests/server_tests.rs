use reqwest::{StatusCode, header, redirect};
use std::sync::Arc;
use tokio::net::TcpListener;
use travel_agency_site::{AppConfig, AppState, ContentState, StaticCatalog, create_router};

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

async fn spawn_app() -> TestApp {
    let content = Arc::new(StaticCatalog::new()) as ContentState;
    let router = create_router(AppState {
        content,
        config: AppConfig::default(),
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Redirects are what we are asserting on, so never follow them.
    let client = reqwest::Client::builder()
        .redirect(redirect::Policy::none())
        .build()
        .expect("Failed to build client");

    TestApp { address, client }
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_anonymous_dashboard_redirects_to_login_on_same_origin() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/dashboard/settings", app.address))
        .send()
        .await
        .expect("req fail");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, format!("{}/login", app.address));
}

#[tokio::test]
async fn test_user_cookie_reaches_profile_and_is_bounced_from_dashboard() {
    let app = spawn_app().await;
    let cookie = "user=%7B%22role%22%3A%22user%22%7D";

    let profile = app
        .client
        .get(format!("{}/profile", app.address))
        .header(header::COOKIE, cookie)
        .send()
        .await
        .expect("req fail");
    assert_eq!(profile.status(), StatusCode::OK);
    assert!(profile.text().await.unwrap().contains("Welcome back, traveller"));

    let dashboard = app
        .client
        .get(format!("{}/dashboard", app.address))
        .header(header::COOKIE, cookie)
        .send()
        .await
        .expect("req fail");
    assert_eq!(dashboard.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        dashboard.headers()[header::LOCATION],
        format!("{}/profile", app.address).as_str()
    );
}

#[tokio::test]
async fn test_packages_api_over_http() {
    let app = spawn_app().await;

    let packages: Vec<travel_agency_site::models::TravelPackage> = app
        .client
        .get(format!("{}/api/packages", app.address))
        .send()
        .await
        .expect("req fail")
        .json()
        .await
        .expect("invalid json");

    assert!(packages.iter().any(|p| p.slug == "bali-escape"));
}
