//! Internal mail operations.

pub mod service;

pub use service::MailService;
