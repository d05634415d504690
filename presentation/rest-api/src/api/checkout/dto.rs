use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::checkout::model::{CheckoutItem, CheckoutSession};

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    /// Payment method chosen by the buyer (e.g. "card")
    pub payment_method: String,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutItemResponse {
    pub product_id: String,
    pub quantity: u32,
    /// Price captured at checkout as a decimal string
    pub unit_price: String,
}

impl From<CheckoutItem> for CheckoutItemResponse {
    fn from(item: CheckoutItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutSessionResponse {
    pub id: String,
    pub amount: String,
    /// "pending", "completed" or "failed"
    pub status: String,
    pub payment_method: String,
    pub items: Vec<CheckoutItemResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<CheckoutSession> for CheckoutSessionResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            id: session.id.to_string(),
            amount: session.amount.to_string(),
            status: session.status.to_string(),
            payment_method: session.payment_method,
            items: session.items.into_iter().map(Into::into).collect(),
            created_at: session.created_at,
        }
    }
}
