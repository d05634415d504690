use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Classifies a MIME type as image or video.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaType::Image)
        } else if mime.starts_with("video/") {
            Some(MediaType::Video)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductMedia {
    pub id: Uuid,
    pub product_id: Uuid,
    pub media_url: String,
    pub media_type: MediaType,
    pub display_order: i32,
}

/// Catalog entry. Owned by the catalog; the cart only reads it.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
    pub stock: u32,
    pub media: Vec<ProductMedia>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_mime_types() {
        assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Image));
        assert_eq!(MediaType::from_mime("video/mp4"), Some(MediaType::Video));
        assert_eq!(MediaType::from_mime("application/pdf"), None);
    }

    #[test]
    fn should_round_trip_media_type_names() {
        assert_eq!(MediaType::Video.to_string(), "video");
        assert_eq!("image".parse::<MediaType>().ok(), Some(MediaType::Image));
        assert!("audio".parse::<MediaType>().is_err());
    }
}
