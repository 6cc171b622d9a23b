//! Applying to jobs, reviewing, accepting and rejecting.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;
use jobportal_entity::user::Role;

async fn post_job(app: &TestApp, admin_token: &str, openings: u32) -> String {
    let response = app
        .post(
            "/api/jobs",
            json!({
                "title": "Data Engineer",
                "description": "Pipelines",
                "location": "Hanoi",
                "job_type": "full-time",
                "openings": openings,
            }),
            Some(admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.data()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_apply_accept_consumes_an_opening() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let (candidate, u_token) = app.login_as(Role::User, "u@example.com").await;
    let job_id = post_job(&app, &a_token, 2).await;

    let applied = app
        .post(
            "/api/applications",
            json!({ "job_id": job_id, "cover_letter": "Hire me" }),
            Some(&u_token),
        )
        .await;
    assert_eq!(applied.status, StatusCode::CREATED);
    assert_eq!(applied.data()["status"], "pending");
    assert_eq!(applied.data()["applied_by"], candidate.id.to_string());
    let id = applied.data()["id"].as_str().unwrap().to_string();

    let by_candidate = app
        .post(&format!("/api/applications/{id}/accept"), json!({}), Some(&u_token))
        .await;
    assert_eq!(by_candidate.status, StatusCode::FORBIDDEN);

    let accepted = app
        .post(&format!("/api/applications/{id}/accept"), json!({}), Some(&e_token))
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.data()["status"], "accepted");

    let job = app.get(&format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(job.data()["openings"], 1);

    let again = app
        .post(&format!("/api/applications/{id}/accept"), json!({}), Some(&a_token))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    let job = app.get(&format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(job.data()["openings"], 1);
}

#[tokio::test]
async fn test_duplicate_application_conflicts() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;
    let job_id = post_job(&app, &a_token, 1).await;

    let body = json!({ "job_id": job_id });
    assert_eq!(
        app.post("/api/applications", body.clone(), Some(&u_token)).await.status,
        StatusCode::CREATED
    );
    assert_eq!(
        app.post("/api/applications", body, Some(&u_token)).await.status,
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_apply_to_missing_job_is_404() {
    let app = TestApp::new();
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;

    let response = app
        .post(
            "/api/applications",
            json!({ "job_id": uuid::Uuid::new_v4() }),
            Some(&u_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_candidates_apply() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, e_token) = app.login_as(Role::Employee, "e@example.com").await;
    let job_id = post_job(&app, &a_token, 1).await;

    let response = app
        .post("/api/applications", json!({ "job_id": job_id }), Some(&e_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_candidates_see_only_their_own() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, u1_token) = app.login_as(Role::User, "u1@example.com").await;
    let (_, u2_token) = app.login_as(Role::User, "u2@example.com").await;
    let job_id = post_job(&app, &a_token, 3).await;

    let mine = app
        .post("/api/applications", json!({ "job_id": job_id }), Some(&u1_token))
        .await;
    app.post("/api/applications", json!({ "job_id": job_id }), Some(&u2_token))
        .await;
    let mine_id = mine.data()["id"].as_str().unwrap().to_string();

    let u1_list = app.get("/api/applications", Some(&u1_token)).await;
    assert_eq!(u1_list.data().as_array().unwrap().len(), 1);

    let staff_list = app.get("/api/applications", Some(&a_token)).await;
    assert_eq!(staff_list.data().as_array().unwrap().len(), 2);

    let peek = app
        .get(&format!("/api/applications/{mine_id}"), Some(&u2_token))
        .await;
    assert_eq!(peek.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reject_removes_application() {
    let app = TestApp::new();
    let (_, a_token) = app.login_as(Role::Admin, "a@example.com").await;
    let (_, u_token) = app.login_as(Role::User, "u@example.com").await;
    let job_id = post_job(&app, &a_token, 1).await;

    let applied = app
        .post("/api/applications", json!({ "job_id": job_id }), Some(&u_token))
        .await;
    let path = format!("/api/applications/{}", applied.data()["id"].as_str().unwrap());

    assert_eq!(app.delete(&path, Some(&u_token)).await.status, StatusCode::FORBIDDEN);
    assert_eq!(app.delete(&path, Some(&a_token)).await.status, StatusCode::OK);
    assert_eq!(app.get(&path, Some(&a_token)).await.status, StatusCode::NOT_FOUND);

    let job = app.get(&format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(job.data()["openings"], 1);
}
