//! surgicode-core
//!
//! Pure domain types for the onboarding engine and the key conventions used
//! to persist tutorial progress. No storage or runtime dependency; this is
//! the shared vocabulary of the SurgiCode tutorial system.

pub mod error;
pub mod models;
pub mod progress_keys;
