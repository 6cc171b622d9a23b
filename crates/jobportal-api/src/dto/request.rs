//! Request DTOs with validation.
//!
//! Each body converts into the matching entity or service input once it
//! has passed its `validator` rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidateEmail, ValidationError};

use jobportal_core::error::AppError;
use jobportal_entity::application::CreateApplication;
use jobportal_entity::interview::{CreateInterview, UpdateInterview};
use jobportal_entity::job::{CreateJob, UpdateJob};
use jobportal_entity::kanban::{CreateKanbanTask, TaskStatus, UpdateKanbanTask};
use jobportal_entity::mail::CreateMail;
use jobportal_entity::sheet::{CreateSheet, UpdateSheet};
use jobportal_entity::user::Role;
use jobportal_service::auth::{LoginInput, SignupInput};
use jobportal_service::employee::{CreateEmployeeInput, UpdateEmployeeInput};

// ── Auth ─────────────────────────────────────────────────────────

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Length policy is enforced by the auth service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            phone: req.phone,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

// ── Jobs ─────────────────────────────────────────────────────────

/// Create job request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    pub salary: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub job_type: String,
    #[validate(range(min = 1, max = 10000))]
    pub openings: u32,
}

impl From<CreateJobRequest> for CreateJob {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            location: req.location,
            salary: req.salary,
            job_type: req.job_type,
            openings: req.openings,
        }
    }
}

/// Update job request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    pub salary: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub job_type: Option<String>,
    #[validate(range(max = 10000))]
    pub openings: Option<u32>,
}

impl From<UpdateJobRequest> for UpdateJob {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            location: req.location,
            salary: req.salary,
            job_type: req.job_type,
            openings: req.openings,
        }
    }
}

// ── Applications ─────────────────────────────────────────────────

/// Apply-to-job request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    pub job_id: Uuid,
    #[validate(length(max = 5000))]
    pub cover_letter: Option<String>,
    #[validate(url)]
    pub resume_url: Option<String>,
}

impl From<CreateApplicationRequest> for CreateApplication {
    fn from(req: CreateApplicationRequest) -> Self {
        Self {
            job_id: req.job_id,
            cover_letter: req.cover_letter,
            resume_url: req.resume_url,
        }
    }
}

// ── Interviews ───────────────────────────────────────────────────

/// Schedule interview request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInterviewRequest {
    #[validate(length(min = 1, max = 200))]
    pub candidate_name: String,
    #[validate(email)]
    pub candidate_email: String,
    pub job_id: Option<Uuid>,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl From<CreateInterviewRequest> for CreateInterview {
    fn from(req: CreateInterviewRequest) -> Self {
        Self {
            candidate_name: req.candidate_name,
            candidate_email: req.candidate_email,
            job_id: req.job_id,
            scheduled_at: req.scheduled_at,
            location: req.location,
            notes: req.notes,
        }
    }
}

/// Update interview request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateInterviewRequest {
    #[validate(length(min = 1, max = 200))]
    pub candidate_name: Option<String>,
    #[validate(email)]
    pub candidate_email: Option<String>,
    pub job_id: Option<Uuid>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateInterviewRequest> for UpdateInterview {
    fn from(req: UpdateInterviewRequest) -> Self {
        Self {
            candidate_name: req.candidate_name,
            candidate_email: req.candidate_email,
            job_id: req.job_id,
            scheduled_at: req.scheduled_at,
            location: req.location,
            notes: req.notes,
        }
    }
}

// ── Mails ────────────────────────────────────────────────────────

/// Compose mail request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMailRequest {
    #[validate(
        length(min = 1, message = "At least one recipient is required"),
        custom(function = "validate_recipients")
    )]
    pub recipients: Vec<String>,
    #[validate(length(min = 1, max = 300))]
    pub subject: String,
    pub body: String,
}

fn validate_recipients(recipients: &[String]) -> Result<(), ValidationError> {
    if recipients.iter().all(|r| r.validate_email()) {
        Ok(())
    } else {
        Err(ValidationError::new("recipients").with_message("Every recipient must be an email".into()))
    }
}

impl From<CreateMailRequest> for CreateMail {
    fn from(req: CreateMailRequest) -> Self {
        Self {
            recipients: req.recipients,
            subject: req.subject,
            body: req.body,
        }
    }
}

/// Bulk delete request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkDeleteRequest {
    #[validate(length(max = 1000))]
    pub ids: Vec<Uuid>,
}

// ── Kanban ───────────────────────────────────────────────────────

/// Create kanban task request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateKanbanRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Uuid,
}

impl From<CreateKanbanRequest> for CreateKanbanTask {
    fn from(req: CreateKanbanRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            due_date: req.due_date,
            assigned_to: req.assigned_to,
        }
    }
}

/// Update kanban task request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateKanbanRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<Uuid>,
}

impl From<UpdateKanbanRequest> for UpdateKanbanTask {
    fn from(req: UpdateKanbanRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            due_date: req.due_date,
            assigned_to: req.assigned_to,
        }
    }
}

// ── Employees ────────────────────────────────────────────────────

/// Create staff account request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl From<CreateEmployeeRequest> for CreateEmployeeInput {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            phone: req.phone,
            department: req.department,
            designation: req.designation,
        }
    }
}

/// Update user record request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub password: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl From<UpdateEmployeeRequest> for UpdateEmployeeInput {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            phone: req.phone,
            department: req.department,
            designation: req.designation,
        }
    }
}

/// `GET /employees` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeListQuery {
    /// Role to list; employees when absent.
    pub role: Option<String>,
}

impl EmployeeListQuery {
    /// The requested role, parsed.
    pub fn role(&self) -> Result<Option<Role>, AppError> {
        self.role.as_deref().map(|r| r.parse::<Role>()).transpose()
    }
}

// ── Sheets ───────────────────────────────────────────────────────

/// Create sheet request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSheetRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub cells: Option<serde_json::Value>,
}

impl From<CreateSheetRequest> for CreateSheet {
    fn from(req: CreateSheetRequest) -> Self {
        Self {
            name: req.name,
            cells: req.cells,
        }
    }
}

/// Update sheet request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSheetRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub cells: Option<serde_json::Value>,
}

impl From<UpdateSheetRequest> for UpdateSheet {
    fn from(req: UpdateSheetRequest) -> Self {
        Self {
            name: req.name,
            cells: req.cells,
        }
    }
}
