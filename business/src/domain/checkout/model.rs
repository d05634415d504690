use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CheckoutStatus {
    Pending,
    Completed,
    Failed,
}

/// A purchased line with the price captured at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutItem {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: Uuid,
    pub owner_id: UserId,
    pub amount: BigDecimal,
    pub status: CheckoutStatus,
    pub payment_method: String,
    pub items: Vec<CheckoutItem>,
    pub created_at: DateTime<Utc>,
}

impl CheckoutSession {
    /// Opens a pending session covering every line of `snapshot`.
    pub fn pending(owner_id: UserId, snapshot: &CartSnapshot, payment_method: String) -> Self {
        let items = snapshot
            .lines
            .iter()
            .map(|l| CheckoutItem {
                product_id: l.product.id,
                quantity: l.line.quantity,
                unit_price: l.product.price.clone(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            owner_id,
            amount: snapshot.total_price.clone(),
            status: CheckoutStatus::Pending,
            payment_method,
            items,
            created_at: Utc::now(),
        }
    }
}
