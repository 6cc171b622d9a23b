//! Application builder: wires services into state and serves the router.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use jobportal_auth::password::{PasswordHasher, PasswordValidator};
use jobportal_auth::{Authenticator, JwtDecoder, JwtEncoder, PolicyEngine};
use jobportal_core::config::AppConfig;
use jobportal_core::error::{AppError, ErrorKind};
use jobportal_database::{DatabaseHandle, Repository, UserRepository};
use jobportal_service::{
    ApplicationService, AuthService, EmployeeService, InterviewService, JobService,
    KanbanService, MailService, SheetService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Construct every service over the given store handle.
///
/// Nothing here touches the store; the first request that needs it
/// opens the connection.
pub fn build_state(config: AppConfig, db: Arc<DatabaseHandle>) -> AppState {
    if config.auth.jwt_secret.as_deref().is_none_or(str::is_empty) {
        tracing::warn!("auth.jwt_secret is not set; logins will fail until it is configured");
    }

    // ── Step 1: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.clone()));

    // ── Step 2: Auth system ──────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let authenticator = Arc::new(Authenticator::new(
        JwtDecoder::new(&config.auth),
        config.session.cookie_name.clone(),
    ));
    let policy = Arc::new(PolicyEngine::new());
    tracing::info!("Auth system initialized");

    // ── Step 3: Services ─────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        hasher.clone(),
        validator.clone(),
        encoder,
        config.session.ttl(),
    ));
    let job_service = Arc::new(JobService::new(Repository::new(db.clone()), policy.clone()));
    let application_service = Arc::new(ApplicationService::new(
        Repository::new(db.clone()),
        Repository::new(db.clone()),
        policy.clone(),
    ));
    let interview_service = Arc::new(InterviewService::new(
        Repository::new(db.clone()),
        policy.clone(),
    ));
    let mail_service = Arc::new(MailService::new(Repository::new(db.clone()), policy.clone()));
    let kanban_service = Arc::new(KanbanService::new(
        Repository::new(db.clone()),
        user_repo.clone(),
        policy.clone(),
    ));
    let employee_service = Arc::new(EmployeeService::new(
        user_repo,
        hasher,
        validator,
        policy.clone(),
    ));
    let sheet_service = Arc::new(SheetService::new(Repository::new(db.clone()), policy.clone()));
    tracing::info!("Services initialized");

    AppState {
        config: Arc::new(config),
        db,
        authenticator,
        policy,
        auth_service,
        job_service,
        application_service,
        interview_service,
        mail_service,
        kanban_service,
        employee_service,
        sheet_service,
    }
}

/// Runs the JobPortal server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        provider = ?config.database.provider,
        "Starting JobPortal server..."
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let db = Arc::new(DatabaseHandle::new(config.database.clone()));

    let state = build_state(config, db);
    let app = build_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("JobPortal server shut down cleanly");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
