use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::shared::value_objects::Credential;

pub struct GetCartSnapshotParams {
    pub credential: Option<Credential>,
}

#[async_trait]
pub trait GetCartSnapshotUseCase: Send + Sync {
    async fn execute(&self, params: GetCartSnapshotParams) -> Result<CartSnapshot, CartError>;
}
