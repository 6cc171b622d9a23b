//! # jobportal-service
//!
//! Business logic service layer for JobPortal. Every operation follows the
//! same order: resolve the caller, pass the role gate, load the record,
//! apply the ownership rule, then mutate and persist.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod access;
pub mod application;
pub mod auth;
pub mod context;
pub mod employee;
pub mod interview;
pub mod job;
pub mod kanban;
pub mod mail;
pub mod sheet;

pub use application::ApplicationService;
pub use auth::{AuthService, AuthSession};
pub use context::RequestContext;
pub use employee::EmployeeService;
pub use interview::InterviewService;
pub use job::JobService;
pub use kanban::KanbanService;
pub use mail::MailService;
pub use sheet::SheetService;
