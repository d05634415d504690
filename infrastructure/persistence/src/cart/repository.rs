use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::CartLine;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartItemEntity, to_column};
use crate::db::database_error;

const COLUMNS: &str = "id, user_id, product_id, quantity, created_at, updated_at";

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_all(&self, owner_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {COLUMNS} FROM cart_items WHERE user_id = $1 ORDER BY created_at, id"
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find(
        &self,
        owner_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {COLUMNS} FROM cart_items WHERE user_id = $1 AND product_id = $2"
        ))
        .bind(owner_id.as_str())
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn increment(
        &self,
        line: &CartLine,
        max_quantity: u32,
    ) -> Result<Option<CartLine>, RepositoryError> {
        // The conflict target and the guarded DO UPDATE make insert-or-increment
        // a single statement: concurrent adds serialize on the row lock and each
        // one sees the quantity committed by the previous.
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            r#"INSERT INTO cart_items (id, user_id, product_id, quantity, created_at, updated_at)
            SELECT $1, $2, $3, 1, $4, $4
            WHERE $5::INTEGER >= 1
            ON CONFLICT (user_id, product_id) DO UPDATE SET
                quantity = cart_items.quantity + 1,
                updated_at = EXCLUDED.updated_at
            WHERE cart_items.quantity + 1 <= $5::INTEGER
            RETURNING {COLUMNS}"#
        ))
        .bind(line.id)
        .bind(line.owner_id.as_str())
        .bind(line.product_id)
        .bind(line.updated_at)
        .bind(to_column(max_quantity))
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn set_quantity(
        &self,
        owner_id: &UserId,
        product_id: Uuid,
        quantity: u32,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            r#"UPDATE cart_items SET quantity = $3, updated_at = $4
            WHERE user_id = $1 AND product_id = $2
            RETURNING {COLUMNS}"#
        ))
        .bind(owner_id.as_str())
        .bind(product_id)
        .bind(to_column(quantity))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete(&self, owner_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(owner_id.as_str())
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
