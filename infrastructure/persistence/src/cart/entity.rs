use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            // The column carries a CHECK (quantity >= 1).
            u32::try_from(self.quantity).unwrap_or(0),
            self.created_at,
            self.updated_at,
        )
    }
}

/// Converts a domain quantity into the INTEGER column type, saturating at its maximum.
pub fn to_column(quantity: u32) -> i32 {
    i32::try_from(quantity).unwrap_or(i32::MAX)
}
