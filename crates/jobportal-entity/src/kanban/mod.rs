//! Kanban board entities.

pub mod model;
pub mod status;

pub use model::{CreateKanbanTask, KanbanTask, UpdateKanbanTask};
pub use status::TaskStatus;
