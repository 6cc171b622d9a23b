//! The authenticated principal of a request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobportal_entity::user::{Role, User};

/// Who is making the request, as decoded from a valid session token.
///
/// Never constructed from request input directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user's ID.
    pub subject_id: Uuid,
    /// The user's email at token issuance.
    pub email: String,
    /// The user's role at token issuance.
    pub role: Role,
    /// Display name, if known.
    pub name: Option<String>,
}

impl Identity {
    /// Whether this identity owns a resource whose owner reference is `owner`.
    pub fn owns(&self, owner: Option<Uuid>) -> bool {
        owner == Some(self.subject_id)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            subject_id: user.id,
            email: user.email.clone(),
            role: user.role,
            name: Some(user.name.clone()),
        }
    }
}
