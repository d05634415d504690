use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::catalog::model::{MediaType, Product, ProductMedia};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub seller_id: String,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self, media: Vec<ProductMedia>) -> Product {
        Product {
            id: self.id,
            seller_id: UserId::new(self.seller_id),
            title: self.title,
            description: self.description,
            price: self.price,
            size: self.size,
            condition: self.condition,
            image_url: self.image_url,
            // A negative stock never passes the column CHECK; read it as sold out.
            stock: u32::try_from(self.stock).unwrap_or(0),
            media,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductMediaEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub media_url: String,
    pub media_type: String,
    pub display_order: i32,
}

impl ProductMediaEntity {
    pub fn into_domain(self) -> ProductMedia {
        ProductMedia {
            id: self.id,
            product_id: self.product_id,
            media_type: self
                .media_type
                .parse::<MediaType>()
                .unwrap_or(MediaType::Image),
            media_url: self.media_url,
            display_order: self.display_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(stock: i32) -> ProductEntity {
        ProductEntity {
            id: Uuid::new_v4(),
            seller_id: "seller".to_string(),
            title: "Linen shirt".to_string(),
            description: String::new(),
            price: BigDecimal::from(12),
            size: Some("S".to_string()),
            condition: None,
            image_url: None,
            stock,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_map_product_with_media() {
        let product = entity(4);
        let media = vec![ProductMedia {
            id: Uuid::new_v4(),
            product_id: product.id,
            media_url: "https://cdn.test/a.png".to_string(),
            media_type: MediaType::Image,
            display_order: 0,
        }];

        let product = product.into_domain(media);

        assert_eq!(product.stock, 4);
        assert_eq!(product.media.len(), 1);
        assert_eq!(product.seller_id, UserId::new("seller"));
    }

    #[test]
    fn should_read_negative_stock_as_sold_out() {
        assert_eq!(entity(-2).into_domain(Vec::new()).stock, 0);
    }

    #[test]
    fn should_parse_video_media_type() {
        let media = ProductMediaEntity {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            media_url: "https://cdn.test/clip.mp4".to_string(),
            media_type: "video".to_string(),
            display_order: 1,
        }
        .into_domain();

        assert_eq!(media.media_type, MediaType::Video);
    }
}
