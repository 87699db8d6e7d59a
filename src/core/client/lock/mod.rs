pub mod constant;
pub mod error;
pub mod mongodb;

use ::mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error::LockError;
use serde::{Deserialize, Serialize};

pub use self::mongodb::MongoLockClient;

/// Lock document: the `_id` is the lock key, so the store's uniqueness
/// constraint is what makes acquisition exclusive
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LockInfo {
    pub _id: String,
    pub owner: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub acquired_at: DateTime<Utc>,
}

/// Result of a lock acquisition attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockResult {
    Acquired,
    AlreadyHeld,
}

/// Advisory lock serializing runner invocations against one database.
///
/// Opt-in: the engine takes no lock unless the runner is configured with one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LockClient: Send + Sync {
    /// Acquire the lock if it is available
    async fn try_acquire(&self, key: &str, owner: &str) -> Result<LockResult, LockError>;

    /// Release the lock if still held by `owner`. Releasing a lock that is
    /// not held is not an error.
    async fn release(&self, key: &str, owner: &str) -> Result<(), LockError>;
}
