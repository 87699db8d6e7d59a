pub mod locator;
pub mod runner;

use crate::types::version::MigrationVersion;
use async_trait::async_trait;
use mongodb::Database;

pub use locator::MigrationLocator;
pub use runner::{MigrationRunner, MigrationRunReport};

/// A named, versioned, one-way data/schema transformation.
///
/// Units are stateless: the database handle is passed to [`apply`] by the
/// runner, and `apply` is invoked at most once per run. Implementations
/// return arbitrary errors through `anyhow`; the runner preserves them as the
/// cause of [`MigrationError::MigrationFailed`].
///
/// The hosting application registers units explicitly by building a
/// `Vec<Arc<dyn Migration>>` and passing it to [`MigrationLocator::new`].
///
/// [`apply`]: Migration::apply
/// [`MigrationError::MigrationFailed`]: crate::error::MigrationError::MigrationFailed
#[async_trait]
pub trait Migration: Send + Sync {
    /// Version determining this unit's place in the sequence
    fn version(&self) -> MigrationVersion;

    /// Human-readable description, snapshotted into the applied record
    fn description(&self) -> &str;

    /// Apply the transformation against the target database
    async fn apply(&self, database: &Database) -> anyhow::Result<()>;
}
