use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::shared::value_objects::UserId;

/// Largest quantity a single line may hold (the column is a signed 32-bit integer).
pub const MAX_LINE_QUANTITY: u32 = i32::MAX as u32;

/// One (owner, product, quantity) record. At most one exists per owner and product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: Uuid,
    pub owner_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLine {
    /// A fresh line holding a single unit.
    pub fn new(owner_id: UserId, product_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            product_id,
            quantity: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        owner_id: UserId,
        product_id: Uuid,
        quantity: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            product_id,
            quantity,
            created_at,
            updated_at,
        }
    }
}

/// Validates a requested quantity coming from a caller.
pub fn parse_quantity(requested: i64) -> Result<u32, CartError> {
    u32::try_from(requested)
        .ok()
        .filter(|quantity| *quantity <= MAX_LINE_QUANTITY)
        .ok_or(CartError::InvalidQuantity)
}
