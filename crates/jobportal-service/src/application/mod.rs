//! Candidate application operations.

pub mod service;

pub use service::ApplicationService;
