use aws_sdk_s3::Client;
use surgicode_core::models::{CompletedSet, ProgressRecord, UserId};
use surgicode_core::progress_keys;

use crate::error::StoreError;
use crate::objects;
use crate::store::{BoxFuture, ProgressStore};

/// Progress records as JSON objects under `progress/` in a bucket.
///
/// Suits users who sign in from several devices. No ETag locking: the
/// ledger is last-write-wins by contract.
pub struct S3ProgressStore {
    client: Client,
    bucket: String,
}

impl S3ProgressStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn read(&self, user: &UserId) -> Result<CompletedSet, StoreError> {
        let key = progress_keys::user_progress(user);
        let body = match objects::get_object(&self.client, &self.bucket, &key).await {
            Ok(body) => body,
            Err(StoreError::NotFound { .. }) => {
                tracing::debug!(bucket = %self.bucket, key = %key, "no progress object yet");
                return Ok(CompletedSet::new());
            }
            Err(e) => return Err(e),
        };

        let record = ProgressRecord::from_json(&body)?;
        if record.user_id != *user {
            return Err(StoreError::UserMismatch {
                location: format!("s3://{}/{key}", self.bucket),
                expected: user.to_string(),
                found: record.user_id.to_string(),
            });
        }

        tracing::debug!(bucket = %self.bucket, key = %key, "progress loaded from S3");
        Ok(record.completed)
    }

    async fn write(&self, user: &UserId, completed: &CompletedSet) -> Result<(), StoreError> {
        let key = progress_keys::user_progress(user);
        let body = ProgressRecord::new(user.clone(), completed.clone()).to_json()?;
        objects::put_object(&self.client, &self.bucket, &key, body).await?;

        tracing::debug!(bucket = %self.bucket, key = %key, "progress flushed to S3");
        Ok(())
    }
}

impl ProgressStore for S3ProgressStore {
    fn backend(&self) -> &str {
        "s3"
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
