use surgicode_storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("tutorial not found: {0}")]
    NotFound(String),

    #[error("progress store unavailable: {0}")]
    PersistenceUnavailable(#[from] StoreError),
}
