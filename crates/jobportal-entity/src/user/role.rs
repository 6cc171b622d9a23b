//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of roles.
///
/// Any other value arriving in a token or request is rejected, never
/// widened to a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back-office administrator.
    Admin,
    /// Staff member: posts jobs, schedules interviews, works the kanban board.
    Employee,
    /// Public candidate account.
    User,
}

impl Role {
    /// All roles, in privilege order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Employee, Role::User];

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role belongs to internal staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Employee)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = jobportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            "user" => Ok(Self::User),
            _ => Err(jobportal_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, employee, user"
            ))),
        }
    }
}
