use crate::error::migration::MigrationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered identifier for a migration.
///
/// Versions compare lexicographically over `(major, minor)`. The serialized
/// form is a structured BSON sub-document (`{ major, minor }`), so sorting on
/// `version.major` / `version.minor` in MongoDB agrees with the in-memory
/// ordering and range queries can be pushed down to the server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MigrationVersion {
    pub major: i64,
    pub minor: i64,
}

impl MigrationVersion {
    /// Minimum sentinel, meaning "no migrations applied yet".
    ///
    /// Reserved: the locator rejects migrations registered at or below it,
    /// since they would never be picked up on a fresh database.
    pub const MIN: Self = Self { major: 0, minor: 0 };

    pub const fn new(major: i64, minor: i64) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for MigrationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl From<(i64, i64)> for MigrationVersion {
    fn from((major, minor): (i64, i64)) -> Self {
        Self { major, minor }
    }
}

impl FromStr for MigrationVersion {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MigrationError::InvalidVersionFormat(s.to_string());

        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        // Digits only: `i64::parse` would also take signs and a second dot
        // would end up inside one of the components
        for component in [major, minor] {
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
        }

        let major: i64 = major.parse().map_err(|_| invalid())?;
        let minor: i64 = minor.parse().map_err(|_| invalid())?;

        Ok(Self { major, minor })
    }
}
