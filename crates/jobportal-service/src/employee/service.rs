//! Employee management: admin CRUD over staff user records.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use jobportal_auth::password::{PasswordHasher, PasswordValidator};
use jobportal_auth::{Action, PolicyEngine, ResourceKind};
use jobportal_core::error::AppError;
use jobportal_database::UserRepository;
use jobportal_entity::user::model::normalize_email;
use jobportal_entity::user::{CreateUser, Role, User};

use crate::context::RequestContext;

const KIND: ResourceKind = ResourceKind::Employee;

/// Request to create a staff account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `employee`.
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

/// Request to update a user record, including its role.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateEmployeeInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

/// Handles administrative user management.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    policy: Arc<PolicyEngine>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        policy: Arc<PolicyEngine>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            policy,
        }
    }

    /// List staff with `role`, employees by default.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        role: Option<Role>,
    ) -> Result<Vec<User>, AppError> {
        self.policy.check_role(ctx.identity(), KIND, Action::List)?;
        let role = staff_role(role.unwrap_or(Role::Employee))?;
        self.user_repo.find_by_role(role).await
    }

    /// One user record.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<User, AppError> {
        self.load(ctx, Action::Read, id).await
    }

    /// Create a staff account.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateEmployeeInput,
    ) -> Result<User, AppError> {
        self.policy.check_role(ctx.identity(), KIND, Action::Create)?;
        let role = staff_role(input.role.unwrap_or(Role::Employee))?;
        self.validator.validate(&input.password)?;

        let user = User::new(CreateUser {
            name: input.name,
            email: input.email,
            password_hash: self.hasher.hash_password(&input.password)?,
            role,
            phone: input.phone,
            department: input.department,
            designation: input.designation,
            created_by: ctx.subject_id(),
        });
        self.user_repo.create(&user).await?;

        info!(user_id = %user.id, role = %user.role, created_by = ?ctx.subject_id(), "Employee created");
        Ok(user)
    }

    /// Update a staff record. Role changes take effect at the user's next login.
    ///
    /// Staff can move between `admin` and `employee`; candidate accounts
    /// are out of reach of this service in both directions.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateEmployeeInput,
    ) -> Result<User, AppError> {
        let mut user = self.load(ctx, Action::Update, id).await?;

        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(email) = input.email {
            user.email = normalize_email(&email);
        }
        if let Some(password) = input.password {
            self.validator.validate(&password)?;
            user.password_hash = self.hasher.hash_password(&password)?;
        }
        if let Some(role) = input.role {
            let role = staff_role(role)?;
            if role != user.role {
                info!(user_id = %id, from = %user.role, to = %role, "Role changed");
                user.role = role;
            }
        }
        if let Some(phone) = input.phone {
            user.phone = Some(phone);
        }
        if let Some(department) = input.department {
            user.department = Some(department);
        }
        if let Some(designation) = input.designation {
            user.designation = Some(designation);
        }
        user.updated_at = Utc::now();

        if !self.user_repo.update(&user).await? {
            return Err(AppError::not_found("employee not found"));
        }
        Ok(user)
    }

    /// Delete a user record. References from other documents are kept.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.load(ctx, Action::Delete, id).await?;
        if ctx.subject_id() == Some(id) {
            return Err(AppError::validation("You cannot delete your own account"));
        }
        self.user_repo.delete(id).await?;
        info!(user_id = %id, "Employee deleted");
        Ok(())
    }

    async fn load(&self, ctx: &RequestContext, action: Action, id: Uuid) -> Result<User, AppError> {
        self.policy.check_role(ctx.identity(), KIND, action)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .filter(|user| user.role.is_staff())
            .ok_or_else(|| AppError::not_found("employee not found"))?;
        self.policy.decide(ctx.identity(), KIND, action, Some(&user))?;
        Ok(user)
    }
}

fn staff_role(role: Role) -> Result<Role, AppError> {
    if role.is_staff() {
        Ok(role)
    } else {
        Err(AppError::validation(format!(
            "Employee records must have role admin or employee, not '{role}'"
        )))
    }
}
