//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;
use crate::document::{Document, Owned};

/// A registered account: candidate, employee, or admin.
///
/// The password hash is persisted with the document; API responses are
/// built from a separate DTO that omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, stored lowercased.
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Role (RBAC).
    pub role: Role,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Department, for employee records.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title, for employee records.
    #[serde(default)]
    pub designation: Option<String>,
    /// The admin who created this record, if any.
    #[serde(default)]
    pub created_by: Option<Uuid>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user from creation data.
    pub fn new(data: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            email: normalize_email(&data.email),
            password_hash: data.password_hash,
            role: data.role,
            phone: data.phone,
            department: data.department,
            designation: data.designation,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl Document for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Owned for User {
    fn owner_field() -> &'static str {
        "id"
    }

    fn owner_id(&self) -> Option<Uuid> {
        Some(self.id)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
    /// Phone number.
    pub phone: Option<String>,
    /// Department.
    pub department: Option<String>,
    /// Job title.
    pub designation: Option<String>,
    /// Creating admin's user ID.
    pub created_by: Option<Uuid>,
}

/// Emails compare case-insensitively; they are stored lowercased and trimmed.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
