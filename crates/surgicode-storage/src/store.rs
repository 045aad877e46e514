use std::future::Future;
use std::pin::Pin;

use surgicode_core::models::{CompletedSet, UserId};

use crate::error::StoreError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence for the set of tutorials each user has completed.
///
/// Contract: `load` returns whatever the last `save` for that user wrote, or
/// an empty set if nothing was ever saved. `save` overwrites. There is no
/// merging; concurrent writers for one user resolve as last-write-wins.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ProgressStore: Send + Sync {
    /// Short backend name for logs (e.g. "memory", "local", "s3").
    fn backend(&self) -> &str;

    fn load<'a>(&'a self, user: &'a UserId) -> BoxFuture<'a, Result<CompletedSet, StoreError>>;

    fn save<'a>(
        &'a self,
        user: &'a UserId,
        completed: &'a CompletedSet,
    ) -> BoxFuture<'a, Result<(), StoreError>>;
}
