use super::Migration;
use crate::error::migration::{MigrationError, MigrationResult};
use crate::types::version::MigrationVersion;
use std::sync::Arc;

/// Holds the registered migrations, ordered ascending by version.
///
/// Ordering and de-duplication happen once at construction; all queries are
/// pure and return an identical ordering for the lifetime of the locator.
pub struct MigrationLocator {
    migrations: Vec<Arc<dyn Migration>>,
}

impl MigrationLocator {
    /// Build a locator from explicitly registered migrations.
    ///
    /// Fails with [`MigrationError::DuplicateVersion`] if two units share a
    /// version; a silent tiebreak would make the ordering nondeterministic.
    /// Fails with [`MigrationError::ReservedVersion`] for a version at or
    /// below [`MigrationVersion::MIN`], which the runner treats as "nothing
    /// applied" and would skip forever.
    pub fn new(mut migrations: Vec<Arc<dyn Migration>>) -> MigrationResult<Self> {
        migrations.sort_by_key(|migration| migration.version());

        if let Some(first) = migrations.first() {
            if first.version() <= MigrationVersion::MIN {
                return Err(MigrationError::ReservedVersion(first.version()));
            }
        }

        for window in migrations.windows(2) {
            if window[0].version() == window[1].version() {
                return Err(MigrationError::DuplicateVersion(window[0].version()));
            }
        }

        Ok(Self { migrations })
    }

    /// All known migrations, ascending by version
    pub fn all_migrations(&self) -> &[Arc<dyn Migration>] {
        &self.migrations
    }

    /// Maximum version among all known migrations
    pub fn latest_version(&self) -> MigrationResult<MigrationVersion> {
        self.migrations.last().map(|migration| migration.version()).ok_or(MigrationError::NoMigrationsFound)
    }

    /// Migrations with a version strictly greater than `version`, ascending
    pub fn migrations_after(
        &self,
        version: MigrationVersion,
    ) -> impl Iterator<Item = &Arc<dyn Migration>> {
        self.migrations.iter().skip_while(move |migration| migration.version() <= version)
    }
}
