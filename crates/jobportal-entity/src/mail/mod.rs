//! Internal mail entities.

pub mod model;

pub use model::{CreateMail, Mail};
