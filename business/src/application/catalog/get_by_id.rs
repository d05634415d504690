use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, CatalogError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.catalog
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Product lookup failed for {}: {other}", params.id));
                    CatalogError::Repository(other)
                }
            })
    }
}
