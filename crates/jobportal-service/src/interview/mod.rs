//! Interview scheduling operations.

pub mod service;

pub use service::InterviewService;
