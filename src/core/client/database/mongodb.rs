use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use mongodb::bson::{doc, Bson};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use std::sync::Arc;
use tracing::debug;

use super::constant::APPLIED_MIGRATIONS_COLLECTION;
use super::error::DatabaseError;
use super::mongo_client::MongoClient;
use super::MigrationStatusStore;
use crate::types::record::AppliedMigration;
use crate::types::version::MigrationVersion;

/// Status store backed by an `applied_migrations` collection
pub struct MongoMigrationStatusStore {
    client: Arc<MongoClient>,
}

impl MongoMigrationStatusStore {
    pub fn new(client: Arc<MongoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MigrationStatusStore for MongoMigrationStatusStore {
    async fn last_applied_version(&self) -> Result<Option<MigrationVersion>, DatabaseError> {
        // `$ne: null` excludes both null and missing completion timestamps,
        // so records of failed attempts never count.
        let pipeline = vec![
            doc! { "$match": { "completed_at": { "$ne": Bson::Null } } },
            doc! { "$sort": { "version.major": -1, "version.minor": -1 } },
            doc! { "$limit": 1 },
        ];

        let results: Vec<AppliedMigration> =
            self.client.aggregate::<AppliedMigration, AppliedMigration>(APPLIED_MIGRATIONS_COLLECTION, pipeline).await?;

        Ok(results.into_iter().next().map(|record| record.version))
    }

    async fn applied_migrations(&self) -> Result<Vec<AppliedMigration>, DatabaseError> {
        let options = FindOptions::builder()
            .sort(doc! { "version.major": 1, "version.minor": 1, "started_at": 1 })
            .build();
        self.client.find_many(APPLIED_MIGRATIONS_COLLECTION, doc! {}, Some(options)).await
    }

    async fn start_migration(
        &self,
        version: MigrationVersion,
        description: &str,
    ) -> Result<AppliedMigration, DatabaseError> {
        let record = AppliedMigration::new(version, description);
        self.client.insert_one(APPLIED_MIGRATIONS_COLLECTION, record.clone()).await?;

        debug!(record_id = %record.id, version = %record.version, "Migration attempt recorded");
        Ok(record)
    }

    async fn complete_migration(&self, record: &AppliedMigration) -> Result<AppliedMigration, DatabaseError> {
        let filter = doc! { "_id": record.id };
        let update = doc! {
            "$set": { "completed_at": Bson::DateTime(Utc::now().round_subsecs(0).into()) }
        };
        let options = FindOneAndUpdateOptions::builder().return_document(ReturnDocument::After).build();

        self.client
            .find_one_and_update::<AppliedMigration>(APPLIED_MIGRATIONS_COLLECTION, filter, update, options)
            .await?
            .ok_or_else(|| {
                DatabaseError::RecordNotFound(format!(
                    "Applied-migration record {} (version {}) no longer resolves",
                    record.id, record.version
                ))
            })
    }
}
