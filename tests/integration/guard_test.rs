//! Edge guard behaviour in front of page routes and the API.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;

use helpers::TestApp;
use jobportal_api::AppState;
use jobportal_entity::user::Role;

/// A test app with stub pages that count how often they are reached.
fn app_with_pages(hits: Arc<AtomicUsize>) -> TestApp {
    let page = move || {
        let hits = hits.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            "page"
        }
    };
    let pages: Router<AppState> = Router::new()
        .route("/admin/dashboard", get(page.clone()))
        .route("/employee/board", get(page.clone()))
        .route("/login", get(page.clone()))
        .route("/jobs", get(page.clone()))
        .route("/profile", get(page));
    TestApp::with_pages(pages)
}

#[tokio::test]
async fn test_anonymous_admin_page_redirects_before_handler() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = app_with_pages(hits.clone());

    let response = app.get("/admin/dashboard", None).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/login"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_role_is_sent_to_login() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = app_with_pages(hits.clone());
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;

    let response = app.get("/admin/dashboard", Some(&e_token)).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/login"));

    let own = app.get("/employee/board", Some(&e_token)).await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_matching_role_reaches_page() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = app_with_pages(hits.clone());
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;

    let response = app.get("/admin/dashboard", Some(&a_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_logged_in_user_leaves_login_page() {
    let app = app_with_pages(Arc::new(AtomicUsize::new(0)));
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;

    let admin = app.get("/login", Some(&a_token)).await;
    assert_eq!(admin.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(admin.location(), Some("/admin"));

    let user = app.get("/login", Some(&u_token)).await;
    assert_eq!(user.location(), Some("/"));

    let anonymous = app.get("/login", None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_and_private_pages_for_anonymous() {
    let app = app_with_pages(Arc::new(AtomicUsize::new(0)));

    assert_eq!(app.get("/jobs", None).await.status, StatusCode::OK);

    let private = app.get("/profile", None).await;
    assert_eq!(private.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(private.location(), Some("/login"));
}

#[tokio::test]
async fn test_tampered_cookie_counts_as_anonymous() {
    let app = app_with_pages(Arc::new(AtomicUsize::new(0)));
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;

    let mut tampered = a_token.into_bytes();
    let last = tampered.len() - 2;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    let response = app.get("/admin/dashboard", Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_api_is_never_redirected() {
    let app = TestApp::new();

    let response = app.get("/api/employees", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.location().is_none());

    let unknown = app.get("/api/nothing-here", None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_and_preflight() {
    let app = TestApp::new();
    let origin = (header::ORIGIN, "https://portal.example.com");

    let preflight = app
        .request_with_headers(
            "OPTIONS",
            "/api/jobs",
            None,
            None,
            &[
                origin.clone(),
                (header::ACCESS_CONTROL_REQUEST_METHOD, "POST"),
            ],
        )
        .await;
    assert_eq!(preflight.status, StatusCode::NO_CONTENT);
    assert_eq!(preflight.body, serde_json::Value::Null);
    assert_eq!(
        preflight.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://portal.example.com"
    );
    assert_eq!(
        preflight.headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
    assert!(
        preflight.headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .contains("DELETE")
    );
    assert_eq!(preflight.headers[header::ACCESS_CONTROL_MAX_AGE], "86400");

    let normal = app
        .request_with_headers("GET", "/api/jobs", None, None, &[origin.clone()])
        .await;
    assert_eq!(normal.status, StatusCode::OK);
    assert_eq!(
        normal.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://portal.example.com"
    );

    let redirected = app
        .request_with_headers("GET", "/admin", None, None, &[origin])
        .await;
    assert_eq!(redirected.status, StatusCode::TEMPORARY_REDIRECT);
    assert!(redirected.headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_preflight_on_guarded_page_is_not_redirected() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = app_with_pages(hits.clone());

    let response = app
        .request_with_headers(
            "OPTIONS",
            "/admin/dashboard",
            None,
            None,
            &[
                (header::ORIGIN, "https://portal.example.com"),
                (header::ACCESS_CONTROL_REQUEST_METHOD, "GET"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.location().is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
