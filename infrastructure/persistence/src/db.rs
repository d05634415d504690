use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migrations_missing")]
    MigrationsMissing,
    #[error("database.migration_error")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
}

/// Connection settings for the marketplace database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)
}

/// Applies pending migrations found in `migrations_path`.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        return Err(DatabaseError::MigrationsMissing);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)?;

    tracing::info!("Migrations applied from {}", migrations_path);
    Ok(())
}

/// Maps a driver error onto the domain error, keeping the cause in the logs only.
pub(crate) fn database_error(err: sqlx::Error) -> business::domain::errors::RepositoryError {
    tracing::error!("Database query failed: {err}");
    business::domain::errors::RepositoryError::DatabaseError
}
