use async_trait::async_trait;

use crate::domain::media::errors::MediaError;
use crate::domain::shared::value_objects::Credential;

pub struct DeleteMediaParams {
    pub credential: Option<Credential>,
    pub url: String,
}

#[async_trait]
pub trait DeleteMediaUseCase: Send + Sync {
    async fn execute(&self, params: DeleteMediaParams) -> Result<(), MediaError>;
}
