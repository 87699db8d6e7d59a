use super::error::DatabaseError;
use crate::types::params::DatabaseArgs;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, UpdateOptions};
use mongodb::{bson, Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Serialize a value into a BSON document
pub trait ToDocument {
    fn to_document(&self) -> Result<Document, DatabaseError>;
}

impl<T: Serialize> ToDocument for T {
    fn to_document(&self) -> Result<Document, DatabaseError> {
        let bson = bson::to_bson(self)?;

        if let Bson::Document(document) = bson {
            Ok(document)
        } else {
            Err(DatabaseError::FailedToSerializeDocument(format!("Expected a document, got: {}", bson)))
        }
    }
}

/// Generic MongoDB client with no knowledge of migration types.
///
/// Handles connection management and plain CRUD; the status store and the
/// advisory lock are built on top of it.
pub struct MongoClient {
    database: Arc<Database>,
}

impl MongoClient {
    pub async fn new(args: &DatabaseArgs) -> Result<Self, DatabaseError> {
        let client = Client::with_uri_str(&args.connection_uri).await?;
        let database = Arc::new(client.database(&args.database_name));
        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Find multiple documents
    pub async fn find_many<T>(
        &self,
        collection: &str,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Vec<T>, DatabaseError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = self.collection::<T>(collection).find(filter, options).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a single document
    pub async fn insert_one<T>(&self, collection: &str, document: T) -> Result<(), DatabaseError>
    where
        T: Serialize + Send + Sync,
    {
        self.collection::<T>(collection).insert_one(document, None).await?;
        Ok(())
    }

    /// Insert if no document matches the filter (upsert with `$setOnInsert`).
    /// Returns true if inserted, false if a matching document already existed.
    pub async fn insert_if_not_exists<T>(
        &self,
        collection: &str,
        filter: Document,
        document: T,
    ) -> Result<bool, DatabaseError>
    where
        T: Serialize + ToDocument + Send + Sync,
    {
        let options = UpdateOptions::builder().upsert(true).build();
        let update = doc! { "$setOnInsert": document.to_document()? };
        let result = self.collection::<T>(collection).update_one(filter, update, options).await?;
        Ok(result.matched_count == 0)
    }

    /// Find one and update atomically, returning the document as configured
    /// by `options` (before or after the update)
    pub async fn find_one_and_update<T>(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
        options: FindOneAndUpdateOptions,
    ) -> Result<Option<T>, DatabaseError>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        Ok(self.collection::<T>(collection).find_one_and_update(filter, update, options).await?)
    }

    /// Execute an aggregation pipeline, deserializing each resulting document
    pub async fn aggregate<T, R>(&self, collection: &str, pipeline: Vec<Document>) -> Result<Vec<R>, DatabaseError>
    where
        T: Send + Sync,
        R: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = self.collection::<T>(collection).aggregate(pipeline, None).await?;

        let results: Vec<R> = cursor
            .map_err(DatabaseError::MongoError)
            .and_then(|document| async move {
                bson::from_document(document).map_err(|e| DatabaseError::FailedToSerializeDocument(e.to_string()))
            })
            .try_collect()
            .await?;

        Ok(results)
    }

    /// Delete a single document, returning the deleted count
    pub async fn delete_one<T>(&self, collection: &str, filter: Document) -> Result<u64, DatabaseError>
    where
        T: Send + Sync,
    {
        let result = self.collection::<T>(collection).delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }

    /// Ping the database
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
