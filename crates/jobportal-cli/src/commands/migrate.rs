//! Database migration commands.

use clap::{Args, Subcommand};

use crate::output;
use jobportal_core::config::{AppConfig, StoreProvider};
use jobportal_core::error::AppError;
use jobportal_database::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            if config.database.provider == StoreProvider::Memory {
                output::print_warning("database.provider is 'memory'; nothing to migrate.");
                return Ok(());
            }
            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            jobportal_database::migration::run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }
    Ok(())
}
