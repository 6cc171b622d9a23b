//! Integration tests for the signup, login, logout and identity flow.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use helpers::{PASSWORD, SECRET, TestApp};
use jobportal_auth::{Identity, JwtEncoder};
use jobportal_entity::user::Role;

#[tokio::test]
async fn test_login_sets_cookie_and_me_returns_same_subject() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Employee, "eve@example.com").await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "email": "eve@example.com", "password": PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], user.id.to_string());
    assert_eq!(response.data()["role"], "employee");
    assert!(response.data().get("password_hash").is_none());

    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with("job-auth-token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));

    let token = response.session_token().unwrap();
    let me = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.data()["id"], user.id.to_string());
    assert_eq!(me.data()["email"], "eve@example.com");
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_email() {
    let app = TestApp::new();
    app.seed_user(Role::User, "candidate@example.com").await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "email": "  Candidate@Example.COM ", "password": PASSWORD }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password_is_401_without_cookie() {
    let app = TestApp::new();
    app.seed_user(Role::User, "u@example.com").await;

    let response = app
        .post(
            "/api/auth/login",
            json!({ "email": "u@example.com", "password": "nope" }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert!(response.set_cookie().is_none());

    let unknown = app
        .post(
            "/api/auth/login",
            json!({ "email": "ghost@example.com", "password": PASSWORD }),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["message"], response.body["message"]);
}

#[tokio::test]
async fn test_signup_creates_user_role_and_sets_cookie() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/auth/signup",
            json!({
                "name": "New Candidate",
                "email": "new@example.com",
                "password": "longenough",
            }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["role"], "user");
    assert!(response.data().get("password_hash").is_none());

    let token = response.session_token().unwrap();
    let me = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(me.data()["role"], "user");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.seed_user(Role::User, "taken@example.com").await;

    let response = app
        .post(
            "/api/auth/signup",
            json!({ "name": "Dup", "email": "TAKEN@example.com", "password": "longenough" }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_validation_errors_are_400() {
    let app = TestApp::new();

    let bad_email = app
        .post(
            "/api/auth/signup",
            json!({ "name": "X", "email": "not-an-email", "password": "longenough" }),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert!(bad_email.body["details"]["email"].is_array());

    let short = app
        .post(
            "/api/auth/signup",
            json!({ "name": "X", "email": "x@example.com", "password": "abc" }),
            None,
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);

    let missing = app
        .post("/api/auth/signup", json!({ "name": "X" }), None)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_without_cookie_is_401() {
    let app = TestApp::new();
    let response = app.get("/api/auth/me", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_anonymous() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Admin, "old@example.com").await;

    let encoder = JwtEncoder::from_secret(Some(SECRET));
    let token = encoder
        .issue_at(
            &Identity::from(&user),
            Duration::minutes(5),
            chrono::Utc::now() - Duration::hours(1),
        )
        .unwrap();

    let response = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let app = TestApp::new();
    let user = app.seed_user(Role::Admin, "forged@example.com").await;

    let forged = JwtEncoder::from_secret(Some("someone-elses-secret"))
        .issue(&Identity::from(&user), Duration::minutes(30))
        .unwrap();

    let response = app.get("/api/employees", Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let app = TestApp::new();
    let (_, token) = app.login_as(Role::User, "bye@example.com").await;

    let response = app.post("/api/auth/logout", json!({}), Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with("job-auth-token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
}
