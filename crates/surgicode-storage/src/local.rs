use std::io::ErrorKind;
use std::path::PathBuf;

use surgicode_core::models::{CompletedSet, ProgressRecord, UserId};
use surgicode_core::progress_keys;

use crate::error::StoreError;
use crate::store::{BoxFuture, ProgressStore};

/// One JSON record per user under a base directory.
pub struct LocalProgressStore {
    dir: PathBuf,
}

impl LocalProgressStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, user: &UserId) -> PathBuf {
        self.dir.join(progress_keys::user_progress_file(user))
    }

    async fn read(&self, user: &UserId) -> Result<CompletedSet, StoreError> {
        let path = self.path_for(user);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no progress file yet");
                return Ok(CompletedSet::new());
            }
            Err(e) => return Err(e.into()),
        };

        let record = ProgressRecord::from_json(&bytes)?;
        if record.user_id != *user {
            return Err(StoreError::UserMismatch {
                location: path.display().to_string(),
                expected: user.to_string(),
                found: record.user_id.to_string(),
            });
        }

        tracing::debug!(
            path = %path.display(),
            completed = record.completed.len(),
            "progress loaded from local disk"
        );
        Ok(record.completed)
    }

    /// Atomic write: temp file then rename.
    async fn write(&self, user: &UserId, completed: &CompletedSet) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let record = ProgressRecord::new(user.clone(), completed.clone());
        let json = record.to_json()?;

        let path = self.path_for(user);
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(path = %path.display(), "progress flushed to local disk");
        Ok(())
    }
}

impl ProgressStore for LocalProgressStore {
    fn backend(&self) -> &str {
        "local"
    }

    fn load<'a>(&'a self, user: &'a UserId) -> BoxFuture<'a, Result<CompletedSet, StoreError>> {
        Box::pin(self.read(user))
    }

    fn save<'a>(
        &'a self,
        user: &'a UserId,
        completed: &'a CompletedSet,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(self.write(user, completed))
    }
}
