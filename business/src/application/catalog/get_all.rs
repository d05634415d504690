use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Fetching catalog listing");
        let products = self.catalog.get_all().await.inspect_err(|e| {
            self.logger
                .error(&format!("Catalog listing failed: {e}"));
        })?;
        self.logger
            .info(&format!("Found {} listed products", products.len()));
        Ok(products)
    }
}
