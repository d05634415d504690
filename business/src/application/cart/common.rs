use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

/// Joins the owner's lines with live catalog data.
pub(crate) async fn load_snapshot(
    repository: &dyn CartRepository,
    catalog: &dyn ProductCatalog,
    logger: &dyn Logger,
    owner_id: &UserId,
) -> Result<CartSnapshot, CartError> {
    let lines = repository.get_all(owner_id).await?;
    if lines.is_empty() {
        return Ok(CartSnapshot::empty());
    }

    let product_ids: Vec<Uuid> = lines.iter().map(|l| l.product_id).collect();
    let products = catalog.get_by_ids(&product_ids).await?;

    let line_count = lines.len();
    let snapshot = CartSnapshot::compute(lines, products);
    if snapshot.lines.len() < line_count {
        logger.warn(&format!(
            "Cart of {} references {} products missing from the catalog",
            owner_id,
            line_count - snapshot.lines.len()
        ));
    }
    Ok(snapshot)
}

pub(crate) fn product_lookup_error(err: RepositoryError) -> CartError {
    match err {
        RepositoryError::NotFound => CartError::ProductNotFound,
        other => other.into(),
    }
}

pub(crate) fn log_upstream_failure(logger: &dyn Logger, operation: &str, err: &CartError) {
    if let CartError::UpstreamFailure(source) = err {
        logger.error(&format!("{} failed upstream: {:?}", operation, source));
    }
}
