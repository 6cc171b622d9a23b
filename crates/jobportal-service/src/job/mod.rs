//! Job posting operations.

pub mod service;

pub use service::JobService;
