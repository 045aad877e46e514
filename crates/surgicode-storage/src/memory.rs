use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use surgicode_core::models::{CompletedSet, UserId};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::{BoxFuture, ProgressStore};

/// Progress kept in process memory. Lost when the process exits.
///
/// Can be flipped unavailable to exercise the store-failure paths.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    records: Mutex<HashMap<UserId, CompletedSet>>,
    unavailable: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user's record without counting it as a save.
    pub async fn insert(&self, user: UserId, completed: CompletedSet) {
        self.records.lock().await.insert(user, completed);
    }

    /// What is currently stored for `user`, if anything was ever saved.
    pub async fn stored(&self, user: &UserId) -> Option<CompletedSet> {
        self.records.lock().await.get(user).cloned()
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Number of successful saves since construction.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }
}

impl ProgressStore for MemoryProgressStore {
    fn backend(&self) -> &str {
        "memory"
    }

    fn load<'a>(&'a self, user: &'a UserId) -> BoxFuture<'a, Result<CompletedSet, StoreError>> {
        Box::pin(async move {
            self.check_available()?;
            Ok(self
                .records
                .lock()
                .await
                .get(user)
                .cloned()
                .unwrap_or_default())
        })
    }

    fn save<'a>(
        &'a self,
        user: &'a UserId,
        completed: &'a CompletedSet,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.check_available()?;
            self.records
                .lock()
                .await
                .insert(user.clone(), completed.clone());
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}
