//! surgicode-storage
//!
//! Durable per-user tutorial progress. One trait, [`ProgressStore`], with
//! backends for tests (memory), a single machine (local JSON files) and a
//! shared profile bucket (S3).

pub mod client;
pub mod error;
pub mod local;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use error::StoreError;
pub use local::LocalProgressStore;
pub use memory::MemoryProgressStore;
pub use s3::S3ProgressStore;
pub use store::{BoxFuture, ProgressStore};
