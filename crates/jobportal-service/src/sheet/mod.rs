//! Spreadsheet operations.

pub mod service;

pub use service::SheetService;
