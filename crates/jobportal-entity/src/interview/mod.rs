//! Interview scheduling entities.

pub mod model;

pub use model::{CreateInterview, Interview, UpdateInterview};
