pub mod database;

use clap::{Parser, Subcommand};
use database::DatabaseCliArgs;

#[derive(Parser, Debug)]
#[command(
    name = "mongo-migrator",
    about = "Versioned, fail-fast, resumable schema/data migrations for MongoDB",
    long_about = "Inspect the applied-migration ledger of a MongoDB database.\n\n\
    Applying migrations requires a hosting application: migrations are code, \
    registered with the library's MigrationLocator and executed through its \
    MigrationRunner. This binary covers the read-only operational surface."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the last applied version and the applied-migration ledger
    Status {
        #[command(flatten)]
        database_args: DatabaseCliArgs,
    },
}
