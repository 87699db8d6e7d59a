use super::locator::MigrationLocator;
use super::Migration;
use crate::core::client::database::MigrationStatusStore;
use crate::core::client::lock::constant::MIGRATION_RUN_LOCK_KEY;
use crate::core::client::lock::{LockClient, LockResult};
use crate::error::migration::{MigrationError, MigrationResult};
use crate::types::version::MigrationVersion;
use mongodb::Database;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Outcome of a successful run, for the caller's reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRunReport {
    /// Name of the database the batch ran against
    pub database_name: String,
    /// Last applied version before the run, if any
    pub from_version: Option<MigrationVersion>,
    /// Upper bound the run was asked to reach
    pub target_version: MigrationVersion,
    /// Versions applied by this run, in application order
    pub applied: Vec<MigrationVersion>,
}

/// Applies pending migrations in strict ascending version order.
///
/// Migrations run one at a time; later migrations may depend on the data
/// state produced by earlier ones, so the runner never parallelizes or
/// reorders. The first failing migration stops the whole run: its record is
/// left started-but-incomplete and subsequent migrations are never invoked.
///
/// Multiple runner instances pointed at the same database are **not**
/// coordinated unless an advisory lock is configured with
/// [`with_advisory_lock`]; without it, invocations must be serialized
/// externally (e.g. a deployment-time lock).
///
/// [`with_advisory_lock`]: MigrationRunner::with_advisory_lock
pub struct MigrationRunner {
    locator: MigrationLocator,
    status: Arc<dyn MigrationStatusStore>,
    lock: Option<Arc<dyn LockClient>>,
    database: Database,
    runner_id: Uuid,
}

impl MigrationRunner {
    pub fn new(locator: MigrationLocator, status: Arc<dyn MigrationStatusStore>, database: Database) -> Self {
        Self { locator, status, lock: None, database, runner_id: Uuid::new_v4() }
    }

    /// Serialize runs against this database through an advisory lock. A run
    /// that finds the lock held fails with [`MigrationError::LockUnavailable`]
    /// before touching the status store.
    pub fn with_advisory_lock(mut self, lock: Arc<dyn LockClient>) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn locator(&self) -> &MigrationLocator {
        &self.locator
    }

    /// Update the database to the latest registered version
    pub async fn update_to_latest(&self) -> MigrationResult<MigrationRunReport> {
        let target = self.locator.latest_version()?;
        self.update_to(target).await
    }

    /// Update the database to `target`, applying every registered migration
    /// with a version above the current one and at most `target`
    pub async fn update_to(&self, target: MigrationVersion) -> MigrationResult<MigrationRunReport> {
        match &self.lock {
            None => self.run_batch(target).await,
            Some(lock) => {
                let owner = self.runner_id.to_string();
                match lock.try_acquire(MIGRATION_RUN_LOCK_KEY, &owner).await? {
                    LockResult::Acquired => {}
                    LockResult::AlreadyHeld => return Err(MigrationError::LockUnavailable),
                }

                let result = self.run_batch(target).await;

                // The batch outcome stands even if the release fails; a stale
                // lock only blocks later runs and is visible in the locks
                // collection.
                if let Err(release_error) = lock.release(MIGRATION_RUN_LOCK_KEY, &owner).await {
                    warn!(error = %release_error, "Failed to release migration advisory lock");
                }

                result
            }
        }
    }

    async fn run_batch(&self, target: MigrationVersion) -> MigrationResult<MigrationRunReport> {
        let from_version = self.status.last_applied_version().await?;
        let current = from_version.unwrap_or(MigrationVersion::MIN);

        info!(
            database = self.database.name(),
            current = %current,
            target = %target,
            "Updating database"
        );

        let pending: Vec<&Arc<dyn Migration>> =
            self.locator.migrations_after(current).filter(|migration| migration.version() <= target).collect();

        let mut applied = Vec::with_capacity(pending.len());
        for migration in pending {
            self.apply_migration(migration.as_ref()).await?;
            applied.push(migration.version());
        }

        info!(database = self.database.name(), count = applied.len(), "Database update complete");

        Ok(MigrationRunReport {
            database_name: self.database.name().to_string(),
            from_version,
            target_version: target,
            applied,
        })
    }

    async fn apply_migration(&self, migration: &dyn Migration) -> MigrationResult<()> {
        let version = migration.version();
        let description = migration.description();

        info!(
            database = self.database.name(),
            version = %version,
            description,
            "Applying migration"
        );

        let record = self.status.start_migration(version, description).await?;

        if let Err(cause) = migration.apply(&self.database).await {
            error!(
                database = self.database.name(),
                version = %version,
                description,
                error = %cause,
                "Migration failed to apply"
            );
            // The record keeps its null completion timestamp: a durable
            // marker that this version was attempted and must be re-run.
            return Err(MigrationError::MigrationFailed {
                version,
                description: description.to_string(),
                source: cause.into(),
            });
        }

        self.status.complete_migration(&record).await?;
        Ok(())
    }
}
