use crate::core::client::database::DatabaseError;
use thiserror::Error;

/// Error types for advisory-lock operations
#[derive(Error, Debug)]
pub enum LockError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
}
