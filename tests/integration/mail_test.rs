//! Mailbox privacy and bulk deletion.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;
use jobportal_entity::user::Role;

async fn send(app: &TestApp, token: &str, subject: &str) -> String {
    let response = app
        .post(
            "/api/mails",
            json!({
                "recipients": ["candidate@example.com"],
                "subject": subject,
                "body": "Hello",
            }),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_bulk_delete_skips_foreign_ids() {
    let app = TestApp::new();
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, f_token) = app.login_as(Role::Employee, "f@example.com").await;

    let m1 = send(&app, &e_token, "one").await;
    let m2 = send(&app, &e_token, "two").await;
    let foreign = send(&app, &f_token, "theirs").await;

    let response = app
        .post(
            "/api/mails/bulk-delete",
            json!({ "ids": [m1, m2, foreign] }),
            Some(&e_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["deleted_count"], 2);

    assert!(app.get("/api/mails", Some(&e_token)).await.data().as_array().unwrap().is_empty());

    let survivor = app.get(&format!("/api/mails/{foreign}"), Some(&f_token)).await;
    assert_eq!(survivor.status, StatusCode::OK);
    assert_eq!(survivor.data()["subject"], "theirs");
}

#[tokio::test]
async fn test_bulk_delete_with_no_owned_ids_deletes_nothing() {
    let app = TestApp::new();
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, f_token) = app.login_as(Role::Employee, "f@example.com").await;
    let foreign = send(&app, &f_token, "theirs").await;

    let response = app
        .post("/api/mails/bulk-delete", json!({ "ids": [foreign] }), Some(&e_token))
        .await;
    assert_eq!(response.data()["deleted_count"], 0);

    let empty = app
        .post("/api/mails/bulk-delete", json!({ "ids": [] }), Some(&e_token))
        .await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.data()["deleted_count"], 0);
}

#[tokio::test]
async fn test_mail_is_private_even_from_admins() {
    let app = TestApp::new();
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let id = send(&app, &e_token, "private").await;

    let read = app.get(&format!("/api/mails/{id}"), Some(&a_token)).await;
    assert_eq!(read.status, StatusCode::FORBIDDEN);

    let listed = app.get("/api/mails", Some(&a_token)).await;
    assert_eq!(listed.data(), &Value::Array(vec![]));

    let deleted = app.delete(&format!("/api/mails/{id}"), Some(&a_token)).await;
    assert_eq!(deleted.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_candidates_cannot_use_mail() {
    let app = TestApp::new();
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;

    let response = app
        .post(
            "/api/mails",
            json!({ "recipients": ["x@example.com"], "subject": "hi", "body": "" }),
            Some(&u_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let bulk = app
        .post("/api/mails/bulk-delete", json!({ "ids": [] }), Some(&u_token))
        .await;
    assert_eq!(bulk.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_recipient_is_400() {
    let app = TestApp::new();
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;

    let response = app
        .post(
            "/api/mails",
            json!({ "recipients": ["nobody"], "subject": "hi", "body": "" }),
            Some(&e_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
