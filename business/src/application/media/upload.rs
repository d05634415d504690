use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::identity::resolve_caller;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaError;
use crate::domain::media::model::{UploadedMedia, object_key, validate_upload};
use crate::domain::media::storage::MediaStorage;
use crate::domain::media::use_cases::upload::{UploadMediaParams, UploadMediaUseCase};

/// Total attempts for one upload, first try included.
pub const UPLOAD_ATTEMPTS: u32 = 3;

pub struct UploadMediaUseCaseImpl {
    pub storage: Arc<dyn MediaStorage>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
    /// Delay before the second attempt; grows linearly with each retry.
    pub retry_backoff: Duration,
}

#[async_trait]
impl UploadMediaUseCase for UploadMediaUseCaseImpl {
    async fn execute(&self, params: UploadMediaParams) -> Result<UploadedMedia, MediaError> {
        let owner_id = resolve_caller(self.identity.as_ref(), params.credential.as_ref())
            .await?
            .ok_or(MediaError::Unauthenticated)?;

        let media_type = validate_upload(&params.content_type, params.bytes.len())?;
        let key = object_key(
            &owner_id,
            &params.file_name,
            Utc::now().date_naive(),
            Uuid::new_v4(),
        );

        self.logger.info(&format!(
            "Uploading {} ({} bytes) for {}",
            key,
            params.bytes.len(),
            owner_id
        ));

        let mut attempt = 1;
        loop {
            match self
                .storage
                .put(&key, &params.content_type, &params.bytes)
                .await
            {
                Ok(url) => {
                    self.logger.info(&format!("Uploaded {} to {}", key, url));
                    return Ok(UploadedMedia { url, media_type });
                }
                Err(err) if err.is_transient() && attempt < UPLOAD_ATTEMPTS => {
                    self.logger.warn(&format!(
                        "Upload of {} failed on attempt {}, retrying",
                        key, attempt
                    ));
                    tokio::time::sleep(self.retry_backoff * attempt).await;
                    attempt += 1;
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Upload of {} failed after {} attempts: {}",
                        key, attempt, err
                    ));
                    return Err(err.into());
                }
            }
        }
    }
}
