//! Custom Axum extractors.

pub mod identity;
pub mod json;
pub mod path;

pub use identity::{CurrentIdentity, identify_headers};
pub use json::{JsonBody, ValidatedJson};
pub use path::parse_uuid;
