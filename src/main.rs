use clap::Parser as _;
use dotenvy::dotenv;
use mongo_migrator::cli::{Cli, Commands};
use mongo_migrator::core::client::database::{MigrationStatusStore, MongoClient, MongoMigrationStatusStore};
use mongo_migrator::types::params::DatabaseArgs;
use mongo_migrator::utils::logging::init_logging;
use mongo_migrator::MigratorResult;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Status { database_args } => {
            let args = DatabaseArgs::from(database_args.clone());
            if let Err(e) = report_status(&args).await {
                error!(
                    error = %e,
                    error_chain = ?e,
                    database = %args.database_name,
                    "Failed to report migration status"
                );
                std::process::exit(1);
            }
        }
    }
}

async fn report_status(args: &DatabaseArgs) -> MigratorResult<()> {
    let client = Arc::new(MongoClient::new(args).await?);
    client.health_check().await?;

    let status = MongoMigrationStatusStore::new(client.clone());

    match status.last_applied_version().await? {
        Some(version) => info!(database = %args.database_name, last_applied = %version, "Migration status"),
        None => info!(database = %args.database_name, "No migrations applied yet"),
    }

    for record in status.applied_migrations().await? {
        match record.completed_at {
            Some(completed_at) => info!(
                version = %record.version,
                description = %record.description,
                started_at = %record.started_at,
                completed_at = %completed_at,
                "completed"
            ),
            None => info!(
                version = %record.version,
                description = %record.description,
                started_at = %record.started_at,
                "started, never completed"
            ),
        }
    }

    Ok(())
}
