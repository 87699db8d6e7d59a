use crate::types::version::MigrationVersion;
use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::serde_helpers::{chrono_datetime_as_bson_datetime, uuid_1_as_binary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted fact that a migration was attempted.
///
/// One record per attempt, append-only. A non-null `completed_at` means the
/// migration's apply operation returned without error; a record with only a
/// start timestamp marks an attempt whose outcome is unknown or failed, left
/// in place as a durable marker for diagnosis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    /// Unique identifier of the attempt, used as the completion handle
    #[serde(rename = "_id", with = "uuid_1_as_binary")]
    pub id: Uuid,
    /// Version of the migration that was attempted
    pub version: MigrationVersion,
    /// Description snapshot taken when the attempt started
    pub description: String,
    /// Timestamp at which the attempt started
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub started_at: DateTime<Utc>,
    /// Timestamp at which the apply operation returned successfully
    #[serde(with = "chrono_datetime_option_as_bson_datetime")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl AppliedMigration {
    pub fn new(version: MigrationVersion, description: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            version,
            description: description.to_string(),
            started_at: Utc::now().round_subsecs(0),
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// `bson::serde_helpers` has no `Option` variant of the chrono helper, so the
/// nullable completion timestamp gets its own.
mod chrono_datetime_option_as_bson_datetime {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(datetime) => bson::DateTime::from(*datetime).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let value = Option::<bson::DateTime>::deserialize(deserializer)?;
        Ok(value.map(|datetime| datetime.to_chrono()))
    }
}
