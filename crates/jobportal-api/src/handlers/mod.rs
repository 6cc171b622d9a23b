//! HTTP handlers, one module per resource.
//!
//! Handlers translate between HTTP and the service layer only. Every
//! authorization decision is made by the services.

pub mod applications;
pub mod auth;
pub mod employees;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod kanban;
pub mod mails;
pub mod sheets;
