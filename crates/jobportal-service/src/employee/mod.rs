//! Staff record management.

pub mod service;

pub use service::{CreateEmployeeInput, EmployeeService, UpdateEmployeeInput};
