use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::common::{
    load_snapshot, log_upstream_failure, product_lookup_error,
};
use crate::application::identity::resolve_caller;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::parse_quantity;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartLineQuantityParams, UpdateCartLineQuantityUseCase,
};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;

pub struct UpdateCartLineQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCartLineQuantityUseCaseImpl {
    async fn update(
        &self,
        params: UpdateCartLineQuantityParams,
    ) -> Result<CartSnapshot, CartError> {
        let owner_id = resolve_caller(self.identity.as_ref(), params.credential.as_ref())
            .await?
            .ok_or(CartError::Unauthenticated)?;
        let quantity = parse_quantity(params.quantity)?;

        self.logger.info(&format!(
            "Setting product {} to {} units in cart of {}",
            params.product_id, quantity, owner_id
        ));

        if quantity == 0 {
            // Same as an explicit removal, including being a no-op when absent.
            self.repository
                .delete(&owner_id, params.product_id)
                .await?;
        } else {
            self.repository
                .find(&owner_id, params.product_id)
                .await?
                .ok_or(CartError::NotFound)?;

            let product = self
                .catalog
                .get_by_id(params.product_id)
                .await
                .map_err(product_lookup_error)?;
            if !product.has_stock_for(quantity) {
                self.logger.warn(&format!(
                    "Requested {} units of product {} but only {} in stock",
                    quantity, product.id, product.stock
                ));
                return Err(CartError::OutOfStock);
            }

            self.repository
                .set_quantity(&owner_id, params.product_id, quantity, chrono::Utc::now())
                .await?
                .ok_or(CartError::NotFound)?;
        }

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
impl UpdateCartLineQuantityUseCase for UpdateCartLineQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartLineQuantityParams,
    ) -> Result<CartSnapshot, CartError> {
        self.update(params)
            .await
            .inspect_err(|err| log_upstream_failure(self.logger.as_ref(), "Quantity update", err))
    }
}
