use std::sync::Arc;
use std::time::Duration;

use firebase::FirebaseIdentityProvider;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::catalog::repository::ProductCatalogPostgres;
use persistence::checkout::repository::CheckoutRepositoryPostgres;
use storage::{SupabaseClient, SupabaseStorage};

use business::application::cart::add_line::AddCartLineUseCaseImpl;
use business::application::cart::get_snapshot::GetCartSnapshotUseCaseImpl;
use business::application::cart::remove_line::RemoveCartLineUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartLineQuantityUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::checkout::place_order::CheckoutUseCaseImpl;
use business::application::media::delete::DeleteMediaUseCaseImpl;
use business::application::media::upload::UploadMediaUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::HealthApi;
use crate::api::media::routes::MediaApi;
use crate::api::product::routes::ProductApi;
use crate::config::app_config::AppConfig;

const UPLOAD_RETRY_BACKOFF: Duration = Duration::from_millis(250);

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub media_api: MediaApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let catalog = Arc::new(ProductCatalogPostgres::new(pool.clone()));
        let checkout_repository = Arc::new(CheckoutRepositoryPostgres::new(pool));
        let identity = Arc::new(FirebaseIdentityProvider::new(
            config.firebase.project_id.clone(),
        ));
        let storage = Arc::new(SupabaseStorage::new(SupabaseClient::new(
            config.storage.base_url.clone(),
            config.storage.service_key.clone(),
            config.storage.bucket.clone(),
        )));

        // Catalog use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_snapshot_use_case = Arc::new(GetCartSnapshotUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        });
        let add_line_use_case = Arc::new(AddCartLineUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartLineQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        });
        let remove_line_use_case = Arc::new(RemoveCartLineUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        });

        // Checkout use case
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            cart_repository,
            catalog,
            checkout_repository,
            identity: identity.clone(),
            logger: logger.clone(),
        });

        // Media use cases
        let upload_use_case = Arc::new(UploadMediaUseCaseImpl {
            storage: storage.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
            retry_backoff: UPLOAD_RETRY_BACKOFF,
        });
        let delete_media_use_case = Arc::new(DeleteMediaUseCaseImpl {
            storage,
            identity,
            logger,
        });

        Self {
            health_api,
            product_api: ProductApi::new(get_all_products_use_case, get_product_by_id_use_case),
            cart_api: CartApi::new(
                get_snapshot_use_case,
                add_line_use_case,
                update_quantity_use_case,
                remove_line_use_case,
            ),
            checkout_api: CheckoutApi::new(checkout_use_case),
            media_api: MediaApi::new(upload_use_case, delete_media_use_case),
        }
    }
}
