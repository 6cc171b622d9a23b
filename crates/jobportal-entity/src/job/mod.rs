//! Job posting entities.

pub mod model;

pub use model::{CreateJob, Job, UpdateJob};
