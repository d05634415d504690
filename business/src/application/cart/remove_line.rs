use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::common::{load_snapshot, log_upstream_failure};
use crate::application::identity::resolve_caller;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;

pub struct RemoveCartLineUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub identity: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveCartLineUseCaseImpl {
    async fn remove(&self, params: RemoveCartLineParams) -> Result<CartSnapshot, CartError> {
        let owner_id = resolve_caller(self.identity.as_ref(), params.credential.as_ref())
            .await?
            .ok_or(CartError::Unauthenticated)?;

        let removed = self
            .repository
            .delete(&owner_id, params.product_id)
            .await?;
        if removed {
            self.logger.info(&format!(
                "Removed product {} from cart of {}",
                params.product_id, owner_id
            ));
        } else {
            self.logger.debug(&format!(
                "Product {} was not in cart of {}",
                params.product_id, owner_id
            ));
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
impl RemoveCartLineUseCase for RemoveCartLineUseCaseImpl {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<CartSnapshot, CartError> {
        self.remove(params)
            .await
            .inspect_err(|err| log_upstream_failure(self.logger.as_ref(), "Cart removal", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_remaining_lines_after_removal() {
        let kept = Uuid::new_v4();
        let mut repository = MockCartRepo::new();
        repository.expect_delete().times(1).returning(|_, _| Ok(true));
        repository
            .expect_get_all()
            .returning(move |_| Ok(vec![line(kept, 2)]));
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_ids()
            .returning(move |_| Ok(vec![product(kept, "3.00", 9)]));

        let use_case = RemoveCartLineUseCaseImpl {
            repository: Arc::new(repository),
            catalog: Arc::new(catalog),
            identity: signed_in(),
            logger: mock_logger(),
        };

        let snapshot = use_case
            .execute(RemoveCartLineParams {
                credential: credential(),
                product_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.total_items, 2);
    }

    #[tokio::test]
    async fn should_succeed_when_line_is_already_gone() {
        let mut repository = MockCartRepo::new();
        repository.expect_delete().times(2).returning(|_, _| Ok(false));
        repository.expect_get_all().returning(|_| Ok(Vec::new()));

        let use_case = RemoveCartLineUseCaseImpl {
            repository: Arc::new(repository),
            catalog: Arc::new(MockCatalog::new()),
            identity: signed_in(),
            logger: mock_logger(),
        };
        let product_id = Uuid::new_v4();

        for _ in 0..2 {
            let snapshot = use_case
                .execute(RemoveCartLineParams {
                    credential: credential(),
                    product_id,
                })
                .await
                .unwrap();
            assert!(snapshot.is_empty());
        }
    }

    #[tokio::test]
    async fn should_reject_removal_when_not_signed_in() {
        let mut repository = MockCartRepo::new();
        repository.expect_delete().never();

        let use_case = RemoveCartLineUseCaseImpl {
            repository: Arc::new(repository),
            catalog: Arc::new(MockCatalog::new()),
            identity: signed_out(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartLineParams {
                credential: credential(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Unauthenticated));
    }
}
