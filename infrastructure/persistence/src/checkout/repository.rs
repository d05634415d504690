use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use business::domain::checkout::model::{CheckoutItem, CheckoutSession};
use business::domain::checkout::repository::{CheckoutRepository, PlacementOutcome};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::cart::entity::to_column;
use crate::db::database_error;

pub struct CheckoutRepositoryPostgres {
    pool: PgPool,
}

impl CheckoutRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Items sorted by product id. Every placement takes its row locks in this
/// order, so two checkouts over the same products cannot deadlock.
fn in_lock_order(items: &[CheckoutItem]) -> Vec<&CheckoutItem> {
    let mut ordered: Vec<&CheckoutItem> = items.iter().collect();
    ordered.sort_by_key(|item| item.product_id);
    ordered
}

/// Removes the purchased units from the owner's line. Units added after the
/// snapshot was taken stay in the cart.
async fn settle_cart_line(
    tx: &mut Transaction<'_, Postgres>,
    owner_id: &UserId,
    item: &CheckoutItem,
    settled_at: chrono::DateTime<chrono::Utc>,
) -> Result<(), RepositoryError> {
    let removed = sqlx::query(
        "DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2 AND quantity <= $3",
    )
    .bind(owner_id.as_str())
    .bind(item.product_id)
    .bind(to_column(item.quantity))
    .execute(&mut **tx)
    .await
    .map_err(database_error)?;

    if removed.rows_affected() == 0 {
        sqlx::query(
            r#"UPDATE cart_items SET quantity = quantity - $3, updated_at = $4
            WHERE user_id = $1 AND product_id = $2 AND quantity > $3"#,
        )
        .bind(owner_id.as_str())
        .bind(item.product_id)
        .bind(to_column(item.quantity))
        .bind(settled_at)
        .execute(&mut **tx)
        .await
        .map_err(database_error)?;
    }
    Ok(())
}

#[async_trait]
impl CheckoutRepository for CheckoutRepositoryPostgres {
    async fn place(&self, session: &CheckoutSession) -> Result<PlacementOutcome, RepositoryError> {
        let items = in_lock_order(&session.items);
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        // Decrement with a floor at zero; a miss rolls the whole placement back
        // when `tx` is dropped.
        for item in &items {
            let reserved = sqlx::query(
                "UPDATE products SET stock = stock - $2 WHERE id = $1 AND stock >= $2",
            )
            .bind(item.product_id)
            .bind(to_column(item.quantity))
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

            if reserved.rows_affected() == 0 {
                return Ok(PlacementOutcome::InsufficientStock(item.product_id));
            }
        }

        sqlx::query(
            r#"INSERT INTO checkout_sessions (id, user_id, amount, status, payment_method, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(session.id)
        .bind(session.owner_id.as_str())
        .bind(&session.amount)
        .bind(session.status.to_string())
        .bind(&session.payment_method)
        .bind(session.created_at)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        for item in &items {
            sqlx::query(
                "INSERT INTO checkout_items (session_id, product_id, quantity, unit_price) VALUES ($1, $2, $3, $4)",
            )
            .bind(session.id)
            .bind(item.product_id)
            .bind(to_column(item.quantity))
            .bind(&item.unit_price)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;
        }

        for item in &items {
            settle_cart_line(&mut tx, &session.owner_id, item, session.created_at).await?;
        }

        tx.commit().await.map_err(database_error)?;
        Ok(PlacementOutcome::Placed)
    }
}
