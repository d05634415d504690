use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    NotFound,
    #[error("catalog.upstream_failure")]
    Repository(#[from] RepositoryError),
}
