//! Application status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an application. Rejection deletes the record, so there is
/// no rejected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, awaiting review.
    #[default]
    Pending,
    /// Accepted by staff.
    Accepted,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
        }
    }
}
