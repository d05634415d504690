use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::CartLine;
use crate::domain::cart::repository::CartRepository;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::checkout::model::CheckoutSession;
use crate::domain::checkout::repository::{CheckoutRepository, PlacementOutcome};
use crate::domain::errors::RepositoryError;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::provider::IdentityProvider;
use crate::domain::logger::Logger;
use crate::domain::media::errors::StorageError;
use crate::domain::media::storage::MediaStorage;
use crate::domain::shared::value_objects::{Credential, UserId};

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn get_all(&self, owner_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
        async fn find(&self, owner_id: &UserId, product_id: Uuid) -> Result<Option<CartLine>, RepositoryError>;
        async fn increment(&self, line: &CartLine, max_quantity: u32) -> Result<Option<CartLine>, RepositoryError>;
        async fn set_quantity(&self, owner_id: &UserId, product_id: Uuid, quantity: u32, updated_at: DateTime<Utc>) -> Result<Option<CartLine>, RepositoryError>;
        async fn delete(&self, owner_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub CheckoutRepo {}

    #[async_trait]
    impl CheckoutRepository for CheckoutRepo {
        async fn place(&self, session: &CheckoutSession) -> Result<PlacementOutcome, RepositoryError>;
    }
}

mock! {
    pub Identity {}

    #[async_trait]
    impl IdentityProvider for Identity {
        async fn resolve(&self, credential: &Credential) -> Result<Option<UserId>, IdentityError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl MediaStorage for Storage {
        async fn put(&self, key: &str, content_type: &str, bytes: &[u8]) -> Result<String, StorageError>;
        async fn delete(&self, key: &str) -> Result<(), StorageError>;
        fn key_for_url(&self, public_url: &str) -> Option<String>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn buyer() -> UserId {
    UserId::new("buyer-uid")
}

pub fn credential() -> Option<Credential> {
    Some(Credential::new("valid-token"))
}

/// Identity provider that recognizes every credential as the test buyer.
pub fn signed_in() -> Arc<dyn IdentityProvider> {
    let mut identity = MockIdentity::new();
    identity.expect_resolve().returning(|_| Ok(Some(buyer())));
    Arc::new(identity)
}

/// Identity provider that recognizes nobody.
pub fn signed_out() -> Arc<dyn IdentityProvider> {
    let mut identity = MockIdentity::new();
    identity.expect_resolve().returning(|_| Ok(None));
    Arc::new(identity)
}

pub fn product(id: Uuid, price: &str, stock: u32) -> Product {
    Product {
        id,
        seller_id: UserId::new("seller-uid"),
        title: "Vintage leather bag".to_string(),
        description: "Barely used".to_string(),
        price: BigDecimal::from_str(price).unwrap(),
        size: None,
        condition: Some("used".to_string()),
        image_url: None,
        stock,
        media: Vec::new(),
        created_at: Utc::now(),
    }
}

pub fn line(product_id: Uuid, quantity: u32) -> CartLine {
    let mut line = CartLine::new(buyer(), product_id);
    line.quantity = quantity;
    line
}
