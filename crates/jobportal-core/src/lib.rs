//! # jobportal-core
//!
//! Core crate for JobPortal. Contains configuration schemas, the
//! document store trait and its filter type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other JobPortal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
