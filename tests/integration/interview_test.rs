//! Interview scheduling across roles.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use jobportal_entity::user::Role;

fn interview_body() -> serde_json::Value {
    json!({
        "candidate_name": "Grace Hopper",
        "candidate_email": "grace@example.com",
        "scheduled_at": "2026-11-02T10:00:00Z",
        "location": "Room 4",
    })
}

#[tokio::test]
async fn test_owner_and_admin_may_edit_other_employee_may_not() {
    let app = TestApp::new();
    let (employee_e, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, f_token) = app.login_as(Role::Employee, "f@example.com").await;

    let created = app.post("/api/interviews", interview_body(), Some(&e_token)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["created_by"], employee_e.id.to_string());
    let id = created.data()["id"].as_str().unwrap().to_string();
    let path = format!("/api/interviews/{id}");

    let by_admin = app
        .put(&path, json!({ "location": "Room 9" }), Some(&a_token))
        .await;
    assert_eq!(by_admin.status, StatusCode::OK);
    assert_eq!(by_admin.data()["location"], "Room 9");
    assert_eq!(by_admin.data()["created_by"], employee_e.id.to_string());

    let by_other = app
        .put(&path, json!({ "location": "Basement" }), Some(&f_token))
        .await;
    assert_eq!(by_other.status, StatusCode::FORBIDDEN);

    let unchanged = app.get(&path, Some(&e_token)).await;
    assert_eq!(unchanged.data()["location"], "Room 9");
}

#[tokio::test]
async fn test_list_is_scoped_to_creator_for_employees() {
    let app = TestApp::new();
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (_, f_token) = app.login_as(Role::Employee, "f@example.com").await;
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;

    app.post("/api/interviews", interview_body(), Some(&e_token)).await;
    app.post("/api/interviews", interview_body(), Some(&e_token)).await;
    app.post("/api/interviews", interview_body(), Some(&f_token)).await;

    let e_list = app.get("/api/interviews", Some(&e_token)).await;
    assert_eq!(e_list.data().as_array().unwrap().len(), 2);

    let f_list = app.get("/api/interviews", Some(&f_token)).await;
    assert_eq!(f_list.data().as_array().unwrap().len(), 1);

    let a_list = app.get("/api/interviews", Some(&a_token)).await;
    assert_eq!(a_list.data().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_candidates_and_anonymous_cannot_schedule() {
    let app = TestApp::new();
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;

    let by_user = app.post("/api/interviews", interview_body(), Some(&u_token)).await;
    assert_eq!(by_user.status, StatusCode::FORBIDDEN);

    let anonymous = app.post("/api/interviews", interview_body(), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_and_malformed_ids() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;

    let missing = app
        .get(
            &format!("/api/interviews/{}", uuid::Uuid::new_v4()),
            Some(&a_token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app.get("/api/interviews/not-a-uuid", Some(&a_token)).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_by_owner() {
    let app = TestApp::new();
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let created = app.post("/api/interviews", interview_body(), Some(&e_token)).await;
    let path = format!("/api/interviews/{}", created.data()["id"].as_str().unwrap());

    assert_eq!(app.delete(&path, Some(&e_token)).await.status, StatusCode::OK);
    assert_eq!(app.get(&path, Some(&e_token)).await.status, StatusCode::NOT_FOUND);
}
