use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::user::UserId;

/// Current on-disk record version. Bump when the shape changes.
pub const RECORD_VERSION: u32 = 1;

/// Ids of tutorials a user has finished. Ordered so serialized output is stable.
pub type CompletedSet = BTreeSet<String>;

/// The durable completion ledger for one user.
///
/// Stored as one JSON document per user, whatever the backend. Only tutorial
/// ids are kept; position within a tutorial is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Missing or 0 = written before versioning.
    #[serde(default)]
    pub record_version: u32,
    pub user_id: UserId,
    #[serde(default)]
    pub completed: CompletedSet,
    pub updated_at: jiff::Timestamp,
}

impl ProgressRecord {
    pub fn new(user_id: UserId, completed: CompletedSet) -> Self {
        Self {
            record_version: RECORD_VERSION,
            user_id,
            completed,
            updated_at: jiff::Timestamp::now(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        let record: Self = serde_json::from_slice(bytes)?;
        if record.record_version > RECORD_VERSION {
            return Err(CoreError::UnsupportedRecordVersion {
                found: record.record_version,
                supported: RECORD_VERSION,
            });
        }
        Ok(record)
    }
}
