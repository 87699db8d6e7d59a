//! Versioned, fail-fast, resumable schema/data migrations for MongoDB.
//!
//! The engine tracks an ordered sequence of migrations and applies each
//! exactly once, recording every attempt in an `applied_migrations`
//! collection so repeated invocations are idempotent. A run either completes
//! all selected migrations in ascending version order, or stops at the first
//! failure with the failing version's record left started-but-incomplete as a
//! durable marker; a later run resumes from the last completed version and
//! re-attempts the failed migration.
//!
//! ```no_run
//! use mongo_migrator::core::client::database::{MongoClient, MongoMigrationStatusStore};
//! use mongo_migrator::migration::{Migration, MigrationLocator, MigrationRunner};
//! use mongo_migrator::types::params::DatabaseArgs;
//! use mongo_migrator::types::version::MigrationVersion;
//! use std::sync::Arc;
//!
//! # struct CreateIndexes;
//! # #[async_trait::async_trait]
//! # impl Migration for CreateIndexes {
//! #     fn version(&self) -> MigrationVersion { MigrationVersion::new(1, 0) }
//! #     fn description(&self) -> &str { "create indexes" }
//! #     async fn apply(&self, _db: &mongodb::Database) -> anyhow::Result<()> { Ok(()) }
//! # }
//! # async fn run() -> mongo_migrator::MigratorResult<()> {
//! let args = DatabaseArgs::new("mongodb://localhost:27017", "app");
//! let client = Arc::new(MongoClient::new(&args).await?);
//!
//! let locator = MigrationLocator::new(vec![Arc::new(CreateIndexes)])?;
//! let status = Arc::new(MongoMigrationStatusStore::new(client.clone()));
//! let runner = MigrationRunner::new(locator, status, client.database().clone());
//!
//! let report = runner.update_to_latest().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! A single run is strictly sequential: one migration at a time, in ascending
//! version order. **Concurrent runner instances against the same database are
//! not coordinated by default** — they can race and double-apply. Either
//! serialize invocations externally (e.g. a deployment-time lock) or opt in
//! to the advisory lock via
//! [`MigrationRunner::with_advisory_lock`](migration::MigrationRunner::with_advisory_lock).
//!
//! There are no rollbacks and no cross-migration transactions: a failed batch
//! leaves earlier migrations applied and recorded.

pub mod cli;
pub mod core;
pub mod error;
pub mod migration;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use error::{MigrationError, MigratorError, MigratorResult};
