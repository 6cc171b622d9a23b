//! User repository implementation.

use std::sync::Arc;

use uuid::Uuid;

use jobportal_core::error::{AppError, ErrorKind};
use jobportal_core::result::AppResult;
use jobportal_core::types::Filter;
use jobportal_entity::user::model::normalize_email;
use jobportal_entity::user::{Role, User};

use super::document::Repository;
use crate::connection::DatabaseHandle;

/// Repository for user accounts.
///
/// Wraps the generic repository with email lookups. Emails are unique
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct UserRepository {
    inner: Repository<User>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(db: Arc<DatabaseHandle>) -> Self {
        Self {
            inner: Repository::new(db),
        }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let filter = Filter::all().eq("email", normalize_email(email));
        Ok(self.inner.find(&filter).await?.into_iter().next())
    }

    /// List all users, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.inner.find_all().await
    }

    /// List users with the given role.
    pub async fn find_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        self.inner
            .find(&Filter::all().eq("role", role.as_str()))
            .await
    }

    /// Insert a new user. Fails with a conflict if the email is taken.
    pub async fn create(&self, user: &User) -> AppResult<()> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(email_taken(&user.email));
        }
        self.inner.create(user).await.map_err(|e| {
            if e.kind == ErrorKind::Conflict {
                email_taken(&user.email)
            } else {
                e
            }
        })
    }

    /// Overwrite a stored user. If the email changed it must still be unique.
    pub async fn update(&self, user: &User) -> AppResult<bool> {
        if let Some(existing) = self.find_by_email(&user.email).await? {
            if existing.id != user.id {
                return Err(email_taken(&user.email));
            }
        }
        self.inner.update(user).await
    }

    /// Delete a user. References held by other documents are left in place.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.inner.delete(id).await
    }

    /// Count users with the given role.
    pub async fn count_by_role(&self, role: Role) -> AppResult<u64> {
        self.inner
            .count(&Filter::all().eq("role", role.as_str()))
            .await
    }
}

fn email_taken(email: &str) -> AppError {
    AppError::conflict(format!("Email '{email}' is already registered"))
}
