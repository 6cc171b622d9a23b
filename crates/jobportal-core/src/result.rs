//! Convenience result type alias for JobPortal.

use crate::error::AppError;

/// A specialized `Result` type for JobPortal operations.
pub type AppResult<T> = Result<T, AppError>;
