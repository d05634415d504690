use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::common::{load_snapshot, log_upstream_failure};
use crate::application::identity::resolve_caller;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::get_snapshot::{GetCartSnapshotParams, GetCartSnapshotUseCase};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;

pub struct GetCartSnapshotUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartSnapshotUseCaseImpl {
    async fn snapshot(&self, params: GetCartSnapshotParams) -> Result<CartSnapshot, CartError> {
        let Some(owner_id) =
            resolve_caller(self.identity.as_ref(), params.credential.as_ref()).await?
        else {
            self.logger.debug("No signed in user, returning empty cart");
            return Ok(CartSnapshot::empty());
        };

        let snapshot = load_snapshot(
            self.repository.as_ref(),
            self.catalog.as_ref(),
            self.logger.as_ref(),
            &owner_id,
        )
        .await?;

        self.logger.info(&format!(
            "Cart of {} holds {} items",
            owner_id, snapshot.total_items
        ));
        Ok(snapshot)
    }
}

#[async_trait]
impl GetCartSnapshotUseCase for GetCartSnapshotUseCaseImpl {
    async fn execute(&self, params: GetCartSnapshotParams) -> Result<CartSnapshot, CartError> {
        self.snapshot(params)
            .await
            .inspect_err(|err| log_upstream_failure(self.logger.as_ref(), "Cart read", err))
    }
}
