use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use mongodb::bson::doc;
use std::sync::Arc;
use tracing::debug;

use super::constant::LOCKS_COLLECTION;
use super::error::LockError;
use super::{LockClient, LockInfo, LockResult};
use crate::core::client::database::MongoClient;

/// Advisory lock backed by a `migration_locks` collection.
///
/// Acquisition is an upsert keyed on `_id`; MongoDB's uniqueness on `_id`
/// guarantees at most one holder per key.
pub struct MongoLockClient {
    client: Arc<MongoClient>,
}

impl MongoLockClient {
    pub fn new(client: Arc<MongoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LockClient for MongoLockClient {
    async fn try_acquire(&self, key: &str, owner: &str) -> Result<LockResult, LockError> {
        let lock = LockInfo {
            _id: key.to_string(),
            owner: owner.to_string(),
            acquired_at: Utc::now().round_subsecs(0),
        };

        let inserted =
            self.client.insert_if_not_exists(LOCKS_COLLECTION, doc! { "_id": key }, lock).await?;

        if inserted {
            debug!(key, owner, "Advisory lock acquired");
            Ok(LockResult::Acquired)
        } else {
            Ok(LockResult::AlreadyHeld)
        }
    }

    async fn release(&self, key: &str, owner: &str) -> Result<(), LockError> {
        let deleted =
            self.client.delete_one::<LockInfo>(LOCKS_COLLECTION, doc! { "_id": key, "owner": owner }).await?;

        if deleted == 0 {
            debug!(key, owner, "Advisory lock was not held at release");
        } else {
            debug!(key, owner, "Advisory lock released");
        }
        Ok(())
    }
}
