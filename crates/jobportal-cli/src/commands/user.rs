//! User management CLI commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use jobportal_core::config::AppConfig;
use jobportal_core::error::AppError;
use jobportal_entity::user::{Role, User};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List accounts
    List {
        /// Filter by role (admin, employee, user)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Change an account's role
    SetRole {
        /// Email of the account
        email: String,
        /// New role (admin, employee, user)
        role: Role,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    department: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            department: u.department.clone().unwrap_or_default(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let user_repo = super::open_users(config).await?;

    match &args.command {
        UserCommand::List { role } => {
            let users = match role {
                Some(role) => user_repo.find_by_role(*role).await?,
                None => user_repo.find_all().await?,
            };
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
        UserCommand::SetRole { email, role } => {
            let mut user = user_repo
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

            if user.role == *role {
                output::print_warning(&format!("'{}' already has role {}", user.email, role));
                return Ok(());
            }

            let previous = user.role;
            user.role = *role;
            user.updated_at = Utc::now();
            user_repo.update(&user).await?;

            output::print_success(&format!(
                "'{}' changed from {} to {} (effective at next login)",
                user.email, previous, role
            ));
        }
    }

    Ok(())
}
