use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::CheckoutSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed,
    /// Nothing was written: this product no longer has enough stock.
    InsufficientStock(Uuid),
}

#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    /// Atomically reserves stock for every item, records the session and
    /// removes the owner's cart lines for the purchased products.
    async fn place(&self, session: &CheckoutSession) -> Result<PlacementOutcome, RepositoryError>;
}
