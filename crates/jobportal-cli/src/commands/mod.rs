//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use jobportal_core::config::{AppConfig, StoreProvider};
use jobportal_core::error::AppError;
use jobportal_database::{DatabaseHandle, UserRepository};

/// JobPortal administration
#[derive(Debug, Parser)]
#[command(name = "jobportal", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (without extension)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay to apply (`config/{env}.toml`)
    #[arg(short, long, env = "JOBPORTAL_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account bootstrap
    Admin(admin::AdminArgs),
    /// User management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the user repository over the configured store.
///
/// The in-memory store lives only as long as this process, so account
/// commands refuse to run against it.
pub async fn open_users(config: &AppConfig) -> Result<UserRepository, AppError> {
    if config.database.provider == StoreProvider::Memory {
        return Err(AppError::configuration(
            "database.provider is 'memory'; account changes would be lost when the CLI exits",
        ));
    }
    let handle = Arc::new(DatabaseHandle::new(config.database.clone()));
    handle.get().await?;
    Ok(UserRepository::new(handle))
}

/// Helper: ask for a password twice when it was not passed on the command line.
pub fn password_or_prompt(password: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match password {
        Some(p) => Ok(p.clone()),
        None => dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
