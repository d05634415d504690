use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::common::{load_snapshot, log_upstream_failure};
use crate::application::identity::resolve_caller;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::checkout::model::CheckoutSession;
use crate::domain::checkout::repository::{CheckoutRepository, PlacementOutcome};
use crate::domain::checkout::use_cases::place_order::{CheckoutParams, CheckoutUseCase};
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub checkout_repository: Arc<dyn CheckoutRepository>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

impl CheckoutUseCaseImpl {
    async fn checkout(&self, params: CheckoutParams) -> Result<CheckoutSession, CartError> {
        let owner_id = resolve_caller(self.identity.as_ref(), params.credential.as_ref())
            .await?
            .ok_or(CartError::Unauthenticated)?;

        let payment_method = params.payment_method.trim();
        if payment_method.is_empty() {
            return Err(CartError::InvalidPaymentMethod);
        }

        let snapshot = load_snapshot(
            self.cart_repository.as_ref(),
            self.catalog.as_ref(),
            self.logger.as_ref(),
            &owner_id,
        )
        .await?;
        if snapshot.is_empty() {
            return Err(CartError::EmptyCart);
        }
        if let Some(short) = snapshot.lines.iter().find(|l| l.exceeds_stock()) {
            self.logger.warn(&format!(
                "Checkout of {} blocked: product {} has {} units left",
                owner_id, short.product.id, short.product.stock
            ));
            return Err(CartError::OutOfStock);
        }

        let session = CheckoutSession::pending(owner_id, &snapshot, payment_method.to_string());
        self.logger.info(&format!(
            "Placing checkout {} for {} ({} items, total {})",
            session.id, session.owner_id, snapshot.total_items, session.amount
        ));

        match self.checkout_repository.place(&session).await? {
            PlacementOutcome::Placed => {
                self.logger
                    .info(&format!("Checkout {} placed, cart cleared", session.id));
                Ok(session)
            }
            PlacementOutcome::InsufficientStock(product_id) => {
                self.logger.warn(&format!(
                    "Checkout {} rolled back: product {} sold out meanwhile",
                    session.id, product_id
                ));
                Err(CartError::OutOfStock)
            }
        }
    }
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutSession, CartError> {
        self.checkout(params)
            .await
            .inspect_err(|err| log_upstream_failure(self.logger.as_ref(), "Checkout", err))
    }
}
