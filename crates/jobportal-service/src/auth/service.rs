//! Authentication service: credential checks and session token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use jobportal_auth::password::{PasswordHasher, PasswordValidator};
use jobportal_auth::{Identity, JwtEncoder};
use jobportal_core::error::AppError;
use jobportal_database::UserRepository;
use jobportal_entity::user::{CreateUser, Role, User};

use crate::context::RequestContext;

/// A freshly authenticated session: the user record and its signed token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Signed session token for the cookie.
    pub token: String,
}

/// Data for a public signup.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Login credentials.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Handles signup, login and identity lookups.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Session lifetime.
    ttl: chrono::Duration,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
            ttl,
        }
    }

    /// Session lifetime applied to issued tokens.
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Register a new candidate account and open a session for it.
    ///
    /// Public signup always creates the `user` role.
    pub async fn signup(&self, input: SignupInput) -> Result<AuthSession, AppError> {
        self.validator.validate(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = User::new(CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: Role::User,
            phone: input.phone,
            department: None,
            designation: None,
            created_by: None,
        });
        // Issue first so a misconfigured signer does not leave an account behind.
        let session = self.open_session(user)?;
        self.user_repo.create(&session.user).await?;

        info!(user_id = %session.user.id, "User signed up");
        Ok(session)
    }

    /// Verify credentials and open a session.
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AppError> {
        let Some(user) = self.user_repo.find_by_email(&input.email).await? else {
            warn!("Login failed: unknown email");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify_password(&input.password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.open_session(user)
    }

    /// The current user's record.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let identity = ctx.require_identity()?;
        self.user_repo
            .find_by_id(identity.subject_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Session user no longer exists"))
    }

    fn open_session(&self, user: User) -> Result<AuthSession, AppError> {
        let token = self.encoder.issue(&Identity::from(&user), self.ttl)?;
        Ok(AuthSession { user, token })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}
