//! Route definitions for the JobPortal HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiErrorResponse;
use crate::handlers;
use crate::middleware::{self, EdgeGuard};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    build_router_with_pages(state, Router::new())
}

/// Build the router with additional page routes mounted beside the API.
///
/// Page routes sit behind the same edge guard as the API, so role-area
/// redirects apply to them before their handlers run. The CORS layer
/// wraps the guard and decorates its redirects too.
pub fn build_router_with_pages(state: AppState, pages: Router<AppState>) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let guard = Arc::new(EdgeGuard::new(&state.config));
    let cors = middleware::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(job_routes())
        .merge(application_routes())
        .merge(interview_routes())
        .merge(mail_routes())
        .merge(kanban_routes())
        .merge(employee_routes())
        .merge(sheet_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(pages)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn_with_state(
            guard,
            middleware::edge_guard,
        ))
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::preflight_no_content))
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            error: "NOT_FOUND".to_string(),
            message: "Route not found".to_string(),
            details: None,
        }),
    )
}

/// Auth endpoints: signup, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::jobs::list).post(handlers::jobs::create),
        )
        .route(
            "/jobs/{id}",
            get(handlers::jobs::get)
                .put(handlers::jobs::update)
                .delete(handlers::jobs::delete),
        )
}

/// Applications: apply, review, accept, reject
fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/applications",
            get(handlers::applications::list).post(handlers::applications::create),
        )
        .route(
            "/applications/{id}",
            get(handlers::applications::get).delete(handlers::applications::reject),
        )
        .route(
            "/applications/{id}/accept",
            post(handlers::applications::accept),
        )
}

fn interview_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/interviews",
            get(handlers::interviews::list).post(handlers::interviews::create),
        )
        .route(
            "/interviews/{id}",
            get(handlers::interviews::get)
                .put(handlers::interviews::update)
                .delete(handlers::interviews::delete),
        )
}

/// Mailbox, including bulk delete
fn mail_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/mails",
            get(handlers::mails::list).post(handlers::mails::create),
        )
        .route("/mails/bulk-delete", post(handlers::mails::bulk_delete))
        .route(
            "/mails/{id}",
            get(handlers::mails::get).delete(handlers::mails::delete),
        )
}

fn kanban_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/kanban",
            get(handlers::kanban::list).post(handlers::kanban::create),
        )
        .route(
            "/kanban/{id}",
            get(handlers::kanban::get)
                .put(handlers::kanban::update)
                .delete(handlers::kanban::delete),
        )
}

/// Staff administration
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/employees/{id}",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::delete),
        )
}

fn sheet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sheets",
            get(handlers::sheets::list).post(handlers::sheets::create),
        )
        .route(
            "/sheets/{id}",
            get(handlers::sheets::get)
                .put(handlers::sheets::update)
                .delete(handlers::sheets::delete),
        )
}

/// Health check (no auth)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
