use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartLine;

/// Persistence port for cart lines.
///
/// Every mutation is a single atomic operation keyed on (owner, product);
/// callers never read-then-write to keep the one-line-per-product invariant.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Lines of `owner_id`, oldest first.
    async fn get_all(&self, owner_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
    async fn find(
        &self,
        owner_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<CartLine>, RepositoryError>;
    /// Inserts `line` or adds one unit to the existing line for the same owner
    /// and product. Writes nothing and returns `None` when the resulting
    /// quantity would exceed `max_quantity`.
    async fn increment(
        &self,
        line: &CartLine,
        max_quantity: u32,
    ) -> Result<Option<CartLine>, RepositoryError>;
    /// Returns `None` when the owner has no line for the product.
    async fn set_quantity(
        &self,
        owner_id: &UserId,
        product_id: Uuid,
        quantity: u32,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CartLine>, RepositoryError>;
    /// Returns whether a line was removed.
    async fn delete(&self, owner_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError>;
}
