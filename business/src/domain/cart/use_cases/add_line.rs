use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::shared::value_objects::Credential;

pub struct AddCartLineParams {
    pub credential: Option<Credential>,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddCartLineUseCase: Send + Sync {
    async fn execute(&self, params: AddCartLineParams) -> Result<CartSnapshot, CartError>;
}
