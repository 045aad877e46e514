use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),

    #[error("progress record version {found} is newer than supported ({supported})")]
    UnsupportedRecordVersion { found: u32, supported: u32 },
}
