//! Admin account commands.
//!
//! Public signup only ever creates candidate accounts, so the first
//! administrator has to come from here.

use chrono::Utc;
use clap::{Args, Subcommand};

use jobportal_auth::password::{PasswordHasher, PasswordValidator};
use jobportal_core::config::AppConfig;
use jobportal_core::error::AppError;
use jobportal_entity::user::{CreateUser, Role, User};

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Email used to log in
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset an account's password
    ResetPassword {
        /// Email of the account
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    let user_repo = super::open_users(config).await?;
    let hasher = PasswordHasher::new();
    let validator = PasswordValidator::new(&config.auth);

    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
        } => {
            let name = match name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin name")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = super::password_or_prompt(password, "Admin password")?;
            validator.validate(&password)?;

            let user = User::new(CreateUser {
                name,
                email,
                password_hash: hasher.hash_password(&password)?,
                role: Role::Admin,
                phone: None,
                department: None,
                designation: None,
                created_by: None,
            });
            user_repo.create(&user).await?;

            output::print_success(&format!(
                "Admin '{}' created (id: {})",
                user.email, user.id
            ));
        }
        AdminCommand::ResetPassword { email, password } => {
            let mut user = user_repo
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

            let password = super::password_or_prompt(password, "New password")?;
            validator.validate(&password)?;

            user.password_hash = hasher.hash_password(&password)?;
            user.updated_at = Utc::now();
            user_repo.update(&user).await?;

            output::print_success(&format!("Password reset for '{}'", user.email));
        }
    }

    Ok(())
}
