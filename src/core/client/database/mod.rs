pub mod constant;
pub mod error;
pub mod mongo_client;
pub mod mongodb;

use crate::types::record::AppliedMigration;
use crate::types::version::MigrationVersion;
use async_trait::async_trait;

pub use error::DatabaseError;
pub use mongo_client::MongoClient;
pub use self::mongodb::MongoMigrationStatusStore;

/// Persisted application status of migrations in the target database.
///
/// The store keeps one `AppliedMigration` record per attempt, append-only. It
/// does not enforce uniqueness per version; re-running after a crash legally
/// creates a second record for the same version, and only the runner's
/// ordering logic (via [`last_applied_version`]) prevents re-application of
/// completed migrations.
///
/// [`last_applied_version`]: MigrationStatusStore::last_applied_version
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MigrationStatusStore: Send + Sync {
    /// Maximum version among completed records, or `None` if no migration has
    /// ever completed. An empty store is a valid, expected state (first run).
    async fn last_applied_version(&self) -> Result<Option<MigrationVersion>, DatabaseError>;

    /// All records, ascending by version then start time
    async fn applied_migrations(&self) -> Result<Vec<AppliedMigration>, DatabaseError>;

    /// Persist a new record with a start timestamp and null completion,
    /// returning it as the handle for [`complete_migration`]
    ///
    /// [`complete_migration`]: MigrationStatusStore::complete_migration
    async fn start_migration(
        &self,
        version: MigrationVersion,
        description: &str,
    ) -> Result<AppliedMigration, DatabaseError>;

    /// Set the completion timestamp on the referenced record, returning the
    /// updated record. Fails with [`DatabaseError::RecordNotFound`] if the
    /// handle no longer resolves.
    async fn complete_migration(&self, record: &AppliedMigration) -> Result<AppliedMigration, DatabaseError>;
}
