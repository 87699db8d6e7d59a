pub mod migration;

use crate::core::client::database::DatabaseError;
use crate::core::client::lock::error::LockError;
use thiserror::Error;

pub use migration::{MigrationError, MigrationResult};

/// Result type for top-level migrator operations
pub type MigratorResult<T> = Result<T, MigratorError>;

/// Error types surfaced to the hosting application / CLI
#[derive(Error, Debug)]
pub enum MigratorError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Lock error: {0}")]
    LockError(#[from] LockError),

    #[error("Migration error: {0}")]
    MigrationError(#[from] MigrationError),
}
