use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::shared::value_objects::Credential;

pub struct UpdateCartLineQuantityParams {
    pub credential: Option<Credential>,
    pub product_id: Uuid,
    /// Signed so that negative requests can be rejected instead of wrapping.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartLineQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCartLineQuantityParams,
    ) -> Result<CartSnapshot, CartError>;
}
