use crate::core::client::database::DatabaseError;
use crate::core::client::lock::error::LockError;
use crate::types::version::MigrationVersion;
use thiserror::Error;

pub type MigrationResult<T> = Result<T, MigrationError>;

/// Error types for migration discovery, ordering and application
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Malformed external version representation, e.g. a bad `--to` argument
    #[error("Invalid migration version format: {0:?} (expected \"major.minor\")")]
    InvalidVersionFormat(String),

    /// The locator has zero registered migrations
    #[error("No migrations are registered")]
    NoMigrationsFound,

    /// Two registered migrations share the same version
    #[error("Duplicate migration version {0}")]
    DuplicateVersion(MigrationVersion),

    /// A registered migration uses the reserved baseline version (or below),
    /// so it could never be applied
    #[error("Migration version {0} is reserved (registered versions must be above 0.0)")]
    ReservedVersion(MigrationVersion),

    /// A migration's apply operation failed; the batch stops here.
    ///
    /// The record for this version is left started-but-incomplete in the
    /// status store, and strictly earlier migrations of the batch are already
    /// completed and recorded.
    #[error("Migration {version} ({description}) failed to apply: {source}")]
    MigrationFailed {
        version: MigrationVersion,
        description: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The advisory lock is held by another runner
    #[error("Migration advisory lock is already held by another runner")]
    LockUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Lock error: {0}")]
    Lock(#[from] LockError),
}
