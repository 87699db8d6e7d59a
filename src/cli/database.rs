use crate::types::params::DatabaseArgs;
use clap::Args;

/// Connection parameters for the target database
#[derive(Debug, Clone, Args)]
pub struct DatabaseCliArgs {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_CONNECTION_URL")]
    pub mongodb_connection_url: String,

    /// Name of the database the migrations run against
    #[arg(long, env = "MONGODB_DATABASE_NAME")]
    pub database_name: String,
}

impl From<DatabaseCliArgs> for DatabaseArgs {
    fn from(args: DatabaseCliArgs) -> Self {
        DatabaseArgs::new(args.mongodb_connection_url, args.database_name)
    }
}
