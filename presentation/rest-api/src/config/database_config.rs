use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Initialize database connection pool from environment variables and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding SQL migrations
///   (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);
    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;
    Ok(pool)
}
