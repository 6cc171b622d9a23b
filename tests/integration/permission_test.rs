//! Role and ownership checks across jobs, employees, kanban and sheets.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use jobportal_entity::user::Role;

fn job_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Write Rust",
        "location": "Remote",
        "job_type": "full-time",
        "openings": 2,
    })
}

#[tokio::test]
async fn test_job_listing_is_public_but_creation_is_admin_only() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;

    let created = app.post("/api/jobs", job_body("Backend"), Some(&a_token)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.data()["id"].as_str().unwrap().to_string();

    let list = app.get("/api/jobs", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.data().as_array().unwrap().len(), 1);
    assert_eq!(
        app.get(&format!("/api/jobs/{id}"), None).await.status,
        StatusCode::OK
    );

    let by_employee = app.post("/api/jobs", job_body("Nope"), Some(&e_token)).await;
    assert_eq!(by_employee.status, StatusCode::FORBIDDEN);

    let anonymous = app.post("/api/jobs", job_body("Nope"), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_employee_cannot_edit_admin_posting() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;

    let created = app.post("/api/jobs", job_body("Backend"), Some(&a_token)).await;
    let path = format!("/api/jobs/{}", created.data()["id"].as_str().unwrap());

    let by_employee = app.put(&path, json!({ "openings": 9 }), Some(&e_token)).await;
    assert_eq!(by_employee.status, StatusCode::FORBIDDEN);

    let by_user = app.delete(&path, Some(&u_token)).await;
    assert_eq!(by_user.status, StatusCode::FORBIDDEN);

    let by_admin = app.put(&path, json!({ "openings": 9 }), Some(&a_token)).await;
    assert_eq!(by_admin.status, StatusCode::OK);
    assert_eq!(by_admin.data()["openings"], 9);
    assert_eq!(by_admin.data()["title"], "Backend");
}

#[tokio::test]
async fn test_role_denial_precedes_not_found() {
    let app = TestApp::new();
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;
    let missing = format!("/api/jobs/{}", uuid::Uuid::new_v4());

    let response = app.put(&missing, json!({ "title": "x" }), Some(&u_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let response = app.put(&missing, json!({ "title": "x" }), Some(&a_token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_admin_crud_and_role_change() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;

    let created = app
        .post(
            "/api/employees",
            json!({
                "name": "Hired",
                "email": "hired@example.com",
                "password": "welcome1",
                "department": "Ops",
            }),
            Some(&a_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["role"], "employee");
    assert!(created.data().get("password_hash").is_none());
    let path = format!("/api/employees/{}", created.data()["id"].as_str().unwrap());

    let listed = app.get("/api/employees", Some(&a_token)).await;
    assert_eq!(listed.data().as_array().unwrap().len(), 2);

    let admins = app.get("/api/employees?role=admin", Some(&a_token)).await;
    assert_eq!(admins.data().as_array().unwrap().len(), 1);

    let promoted = app.put(&path, json!({ "role": "admin" }), Some(&a_token)).await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.data()["role"], "admin");

    // The new role shows up in a fresh session.
    let token = app.login("hired@example.com").await;
    let me = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(me.data()["role"], "admin");

    assert_eq!(
        app.get("/api/employees", Some(&e_token)).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(app.delete(&path, Some(&a_token)).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_employee_email_conflicts() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;

    let response = app
        .post(
            "/api/employees",
            json!({ "name": "Again", "email": "A@example.com", "password": "welcome1" }),
            Some(&a_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_kanban_assignment_scoping() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (e, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, f_token) = app.login_as(Role::Employee, "f@example.com").await;
    let (u, _) = app.login_as(Role::User, "u@example.com").await;

    let created = app
        .post(
            "/api/kanban",
            json!({ "title": "Screen resumes", "assigned_to": e.id }),
            Some(&a_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["status"], "todo");
    let path = format!("/api/kanban/{}", created.data()["id"].as_str().unwrap());

    let to_candidate = app
        .post(
            "/api/kanban",
            json!({ "title": "Bad", "assigned_to": u.id }),
            Some(&a_token),
        )
        .await;
    assert_eq!(to_candidate.status, StatusCode::BAD_REQUEST);

    let moved = app
        .put(&path, json!({ "status": "in_progress" }), Some(&e_token))
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.data()["status"], "in_progress");

    assert_eq!(
        app.get(&path, Some(&f_token)).await.status,
        StatusCode::FORBIDDEN
    );
    assert!(app.get("/api/kanban", Some(&f_token)).await.data().as_array().unwrap().is_empty());
    assert_eq!(app.delete(&path, Some(&e_token)).await.status, StatusCode::FORBIDDEN);
    assert_eq!(app.delete(&path, Some(&a_token)).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_sheets_are_open_to_everyone() {
    let app = TestApp::new();

    let created = app
        .post(
            "/api/sheets",
            json!({ "name": "Budget", "cells": { "A1": "Salary" } }),
            None,
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let path = format!("/api/sheets/{}", created.data()["id"].as_str().unwrap());

    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;
    let updated = app
        .put(&path, json!({ "cells": { "A1": "Bonus" } }), Some(&u_token))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["cells"]["A1"], "Bonus");
    assert_eq!(updated.data()["name"], "Budget");

    assert_eq!(app.delete(&path, None).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_identity_and_role_are_checked_before_the_body() {
    let app = TestApp::new();
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;

    let response = app.post("/api/jobs", json!({}), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.post("/api/jobs", json!({ "title": "" }), Some(&u_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .post("/api/mails/bulk-delete", json!({ "ids": "x" }), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .put("/api/interviews/not-a-uuid", json!({ "title": 7 }), Some(&u_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.delete("/api/kanban/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.get("/api/employees?role=nobody", Some(&u_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_payload_is_validated_once_the_caller_may_act() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;

    let response = app.post("/api/jobs", json!({}), Some(&a_token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app.delete("/api/jobs/not-a-uuid", Some(&a_token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employee_endpoints_ignore_candidate_accounts() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let candidate = app.seed_user(Role::User, "cand@example.com").await;
    let path = format!("/api/employees/{}", candidate.id);

    assert_eq!(app.get(&path, Some(&a_token)).await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.put(&path, json!({ "name": "Renamed" }), Some(&a_token)).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.delete(&path, Some(&a_token)).await.status, StatusCode::NOT_FOUND);

    let listed = app.get("/api/employees?role=user", Some(&a_token)).await;
    assert_eq!(listed.status, StatusCode::BAD_REQUEST);

    let created = app
        .post(
            "/api/employees",
            json!({
                "name": "Cand",
                "email": "cand2@example.com",
                "password": "welcome1",
                "role": "user",
            }),
            Some(&a_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
}
