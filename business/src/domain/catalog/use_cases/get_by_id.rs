use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct GetProductByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, CatalogError>;
}
