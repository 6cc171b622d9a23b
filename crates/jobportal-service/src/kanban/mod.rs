//! Kanban board operations.

pub mod service;

pub use service::KanbanService;
