use std::sync::Arc;

use async_trait::async_trait;

use crate::application::identity::resolve_caller;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;
use crate::domain::media::errors::MediaError;
use crate::domain::media::model::is_owned_by;
use crate::domain::media::storage::MediaStorage;
use crate::domain::media::use_cases::delete::{DeleteMediaParams, DeleteMediaUseCase};

pub struct DeleteMediaUseCaseImpl {
    pub storage: Arc<dyn MediaStorage>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteMediaUseCase for DeleteMediaUseCaseImpl {
    async fn execute(&self, params: DeleteMediaParams) -> Result<(), MediaError> {
        let owner_id = resolve_caller(self.identity.as_ref(), params.credential.as_ref())
            .await?
            .ok_or(MediaError::Unauthenticated)?;

        let key = self
            .storage
            .key_for_url(&params.url)
            .ok_or(MediaError::InvalidUrl)?;

        if !is_owned_by(&key, &owner_id) {
            self.logger.warn(&format!(
                "Refused deletion of {} requested by {}",
                key, owner_id
            ));
            return Err(MediaError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting {} on behalf of {}", key, owner_id));

        self.storage.delete(&key).await.map_err(|err| {
            self.logger
                .error(&format!("Failed to delete {}: {}", key, err));
            MediaError::from(err)
        })
    }
}
