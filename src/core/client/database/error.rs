use mongodb::bson;
use thiserror::Error;

/// Error types for status-store operations against MongoDB
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("MongoDB error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    #[error("Failed to serialize BSON: {0}")]
    BsonSerError(#[from] bson::ser::Error),

    #[error("Failed to deserialize BSON: {0}")]
    BsonDeError(#[from] bson::de::Error),

    #[error("Failed to serialize document: {0}")]
    FailedToSerializeDocument(String),

    /// A record handle no longer resolves to a stored record. Indicates
    /// external tampering or store corruption; fatal to the current run.
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}
