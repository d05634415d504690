use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read access to the product catalog, the source of truth for price and stock.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Every listed product, newest first, each with its media in display order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Products that no longer exist are absent from the result.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
}
