use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::snapshot::{CartSnapshot, SnapshotLine};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product to add one unit of
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity; 0 removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    /// quantity × current price
    pub subtotal: String,
    /// True when stock dropped below the quantity held
    pub exceeds_stock: bool,
    pub product: ProductResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SnapshotLine> for CartLineResponse {
    fn from(line: SnapshotLine) -> Self {
        let exceeds_stock = line.exceeds_stock();
        Self {
            id: line.line.id.to_string(),
            product_id: line.line.product_id.to_string(),
            quantity: line.line.quantity,
            subtotal: line.subtotal.to_string(),
            exceeds_stock,
            product: line.product.into(),
            created_at: line.line.created_at,
            updated_at: line.line.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total_items: u64,
    /// Sum of line subtotals as a decimal string
    pub total_price: String,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            total_items: snapshot.total_items,
            total_price: snapshot.total_price.to_string(),
            lines: snapshot.lines.into_iter().map(Into::into).collect(),
        }
    }
}
