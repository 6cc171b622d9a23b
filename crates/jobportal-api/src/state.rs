//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobportal_auth::{Authenticator, PolicyEngine};
use jobportal_core::config::AppConfig;
use jobportal_database::DatabaseHandle;
use jobportal_service::{
    ApplicationService, AuthService, EmployeeService, InterviewService, JobService,
    KanbanService, MailService, SheetService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Storage ──────────────────────────────────────────────
    /// Lazily connected document store
    pub db: Arc<DatabaseHandle>,

    // ── Auth ─────────────────────────────────────────────────
    /// Session cookie resolver
    pub authenticator: Arc<Authenticator>,
    /// Role and ownership rules
    pub policy: Arc<PolicyEngine>,

    // ── Services ─────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub job_service: Arc<JobService>,
    pub application_service: Arc<ApplicationService>,
    pub interview_service: Arc<InterviewService>,
    pub mail_service: Arc<MailService>,
    pub kanban_service: Arc<KanbanService>,
    pub employee_service: Arc<EmployeeService>,
    pub sheet_service: Arc<SheetService>,
}
