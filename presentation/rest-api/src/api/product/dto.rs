use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::model::{Product, ProductMedia};

#[derive(Debug, Clone, Object)]
pub struct ProductMediaResponse {
    pub id: String,
    pub media_url: String,
    /// "image" or "video"
    pub media_type: String,
    pub display_order: i32,
}

impl From<ProductMedia> for ProductMediaResponse {
    fn from(media: ProductMedia) -> Self {
        Self {
            id: media.id.to_string(),
            media_url: media.media_url,
            media_type: media.media_type.to_string(),
            display_order: media.display_order,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    /// Current price as a decimal string
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub condition: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub stock: u32,
    pub media: Vec<ProductMediaResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            seller_id: product.seller_id.to_string(),
            title: product.title,
            description: product.description,
            price: product.price.to_string(),
            size: product.size,
            condition: product.condition,
            image_url: product.image_url,
            stock: product.stock,
            media: product.media.into_iter().map(Into::into).collect(),
            created_at: product.created_at,
        }
    }
}
