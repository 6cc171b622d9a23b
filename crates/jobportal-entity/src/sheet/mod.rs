//! Collaborative sheet entities.

pub mod model;

pub use model::{CreateSheet, Sheet, UpdateSheet};
