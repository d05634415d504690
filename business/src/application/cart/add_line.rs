use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::common::{
    load_snapshot, log_upstream_failure, product_lookup_error,
};
use crate::application::identity::resolve_caller;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;

pub struct AddCartLineUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

impl AddCartLineUseCaseImpl {
    async fn add(&self, params: AddCartLineParams) -> Result<CartSnapshot, CartError> {
        let owner_id = resolve_caller(self.identity.as_ref(), params.credential.as_ref())
            .await?
            .ok_or(CartError::Unauthenticated)?;

        self.logger.info(&format!(
            "Adding product {} to cart of {}",
            params.product_id, owner_id
        ));

        let product = self
            .catalog
            .get_by_id(params.product_id)
            .await
            .map_err(product_lookup_error)?;

        if product.stock < 1 {
            self.logger
                .warn(&format!("Product {} is out of stock", product.id));
            return Err(CartError::OutOfStock);
        }

        // Insert-or-increment bounded by stock in one atomic write.
        let candidate = CartLine::new(owner_id.clone(), product.id);
        let line = match self.repository.increment(&candidate, product.stock).await? {
            Some(line) => line,
            None => {
                self.logger.warn(&format!(
                    "Cart of {} already holds all {} units of product {}",
                    owner_id, product.stock, product.id
                ));
                return Err(CartError::OutOfStock);
            }
        };

        self.logger.info(&format!(
            "Cart line {} now holds {} units",
            line.id, line.quantity
        ));

        load_snapshot(
            self.repository.as_ref(),
            self.catalog.as_ref(),
            self.logger.as_ref(),
            &owner_id,
        )
        .await
    }
}

#[async_trait]
impl AddCartLineUseCase for AddCartLineUseCaseImpl {
    async fn execute(&self, params: AddCartLineParams) -> Result<CartSnapshot, CartError> {
        self.add(params)
            .await
            .inspect_err(|err| log_upstream_failure(self.logger.as_ref(), "Add to cart", err))
    }
}
