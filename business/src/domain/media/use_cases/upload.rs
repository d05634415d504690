use async_trait::async_trait;

use crate::domain::media::errors::MediaError;
use crate::domain::media::model::UploadedMedia;
use crate::domain::shared::value_objects::Credential;

pub struct UploadMediaParams {
    pub credential: Option<Credential>,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn execute(&self, params: UploadMediaParams) -> Result<UploadedMedia, MediaError>;
}
