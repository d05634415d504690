use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::catalog::model::{Product, ProductMedia};
use business::domain::catalog::repository::ProductCatalog;
use business::domain::errors::RepositoryError;

use super::entity::{ProductEntity, ProductMediaEntity};
use crate::db::database_error;

const PRODUCT_COLUMNS: &str =
    "id, seller_id, title, description, price, size, condition, image_url, stock, created_at";

pub struct ProductCatalogPostgres {
    pool: PgPool,
}

impl ProductCatalogPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn media_for(
        &self,
        product_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<ProductMedia>>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductMediaEntity>(
            "SELECT id, product_id, media_url, media_type, display_order FROM product_media WHERE product_id = ANY($1) ORDER BY display_order, id",
        )
        .bind(product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut by_product: HashMap<Uuid, Vec<ProductMedia>> = HashMap::new();
        for entity in entities {
            by_product
                .entry(entity.product_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(by_product)
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut media = self.media_for(&ids).await?;
        Ok(entities
            .into_iter()
            .map(|e| {
                let product_media = media.remove(&e.id).unwrap_or_default();
                e.into_domain(product_media)
            })
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        let media = self.media_for(&[id]).await?.remove(&id).unwrap_or_default();
        Ok(entity.into_domain(media))
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut media = self.media_for(ids).await?;
        Ok(entities
            .into_iter()
            .map(|e| {
                let product_media = media.remove(&e.id).unwrap_or_default();
                e.into_domain(product_media)
            })
            .collect())
    }
}
