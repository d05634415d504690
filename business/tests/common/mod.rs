#![allow(dead_code)]

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::application::cart::add_line::AddCartLineUseCaseImpl;
use business::application::cart::get_snapshot::GetCartSnapshotUseCaseImpl;
use business::application::cart::remove_line::RemoveCartLineUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartLineQuantityUseCaseImpl;
use business::application::checkout::place_order::CheckoutUseCaseImpl;
use business::domain::cart::model::CartLine;
use business::domain::cart::repository::CartRepository;
use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductCatalog;
use business::domain::checkout::model::CheckoutSession;
use business::domain::checkout::repository::{CheckoutRepository, PlacementOutcome};
use business::domain::errors::RepositoryError;
use business::domain::identity::errors::IdentityError;
use business::domain::identity::provider::IdentityProvider;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::{Credential, UserId};

/// Shared store playing the role of the database: one lock per statement,
/// like a row-locking upsert.
#[derive(Default)]
pub struct Store {
    pub lines: Mutex<Vec<CartLine>>,
    pub products: Mutex<HashMap<Uuid, Product>>,
    pub sessions: Mutex<Vec<CheckoutSession>>,
}

impl Store {
    pub fn add_product(&self, price: &str, stock: u32) -> Uuid {
        let id = Uuid::new_v4();
        self.products.lock().unwrap().insert(
            id,
            Product {
                id,
                seller_id: UserId::new("seller"),
                title: "Wool coat".to_string(),
                description: String::new(),
                price: BigDecimal::from_str(price).unwrap(),
                size: Some("L".to_string()),
                condition: Some("new".to_string()),
                image_url: None,
                stock,
                media: Vec::new(),
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn set_price(&self, id: Uuid, price: &str) {
        if let Some(product) = self.products.lock().unwrap().get_mut(&id) {
            product.price = BigDecimal::from_str(price).unwrap();
        }
    }

    pub fn stock_of(&self, id: Uuid) -> u32 {
        self.products.lock().unwrap()[&id].stock
    }

    pub fn lines_for(&self, owner: &str, product_id: Uuid) -> Vec<CartLine> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.owner_id.as_str() == owner && l.product_id == product_id)
            .cloned()
            .collect()
    }
}

pub struct InMemoryCart(pub Arc<Store>);

#[async_trait]
impl CartRepository for InMemoryCart {
    async fn get_all(&self, owner_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        Ok(self
            .0
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|l| &l.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        owner_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<CartLine>, RepositoryError> {
        Ok(self
            .0
            .lines
            .lock()
            .unwrap()
            .iter()
            .find(|l| &l.owner_id == owner_id && l.product_id == product_id)
            .cloned())
    }

    async fn increment(
        &self,
        line: &CartLine,
        max_quantity: u32,
    ) -> Result<Option<CartLine>, RepositoryError> {
        // Yield first so concurrent callers interleave before the write.
        tokio::task::yield_now().await;
        let mut lines = self.0.lines.lock().unwrap();
        match lines
            .iter_mut()
            .find(|l| l.owner_id == line.owner_id && l.product_id == line.product_id)
        {
            Some(existing) if existing.quantity < max_quantity => {
                existing.quantity += 1;
                existing.updated_at = line.updated_at;
                Ok(Some(existing.clone()))
            }
            Some(_) => Ok(None),
            None if max_quantity >= 1 => {
                lines.push(line.clone());
                Ok(Some(line.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_quantity(
        &self,
        owner_id: &UserId,
        product_id: Uuid,
        quantity: u32,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let mut lines = self.0.lines.lock().unwrap();
        Ok(lines
            .iter_mut()
            .find(|l| &l.owner_id == owner_id && l.product_id == product_id)
            .map(|l| {
                l.quantity = quantity;
                l.updated_at = updated_at;
                l.clone()
            }))
    }

    async fn delete(&self, owner_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError> {
        let mut lines = self.0.lines.lock().unwrap();
        let before = lines.len();
        lines.retain(|l| !(&l.owner_id == owner_id && l.product_id == product_id));
        Ok(lines.len() < before)
    }
}

pub struct InMemoryCatalog(pub Arc<Store>);

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products: Vec<Product> =
            self.0.products.lock().unwrap().values().cloned().collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.0
            .products
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError> {
        let products = self.0.products.lock().unwrap();
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }
}

pub struct InMemoryCheckout(pub Arc<Store>);

#[async_trait]
impl CheckoutRepository for InMemoryCheckout {
    async fn place(&self, session: &CheckoutSession) -> Result<PlacementOutcome, RepositoryError> {
        let mut products = self.0.products.lock().unwrap();
        for item in &session.items {
            let enough = products
                .get(&item.product_id)
                .is_some_and(|p| p.stock >= item.quantity);
            if !enough {
                return Ok(PlacementOutcome::InsufficientStock(item.product_id));
            }
        }
        for item in &session.items {
            if let Some(product) = products.get_mut(&item.product_id) {
                product.stock -= item.quantity;
            }
        }
        let mut lines = self.0.lines.lock().unwrap();
        for item in &session.items {
            if let Some(line) = lines
                .iter_mut()
                .find(|l| l.owner_id == session.owner_id && l.product_id == item.product_id)
            {
                line.quantity = line.quantity.saturating_sub(item.quantity);
            }
        }
        lines.retain(|l| l.quantity > 0);
        drop(lines);
        self.0.sessions.lock().unwrap().push(session.clone());
        Ok(PlacementOutcome::Placed)
    }
}

/// Treats the token text as the user id; the token "anonymous" identifies nobody.
pub struct TokenIsUserId;

#[async_trait]
impl IdentityProvider for TokenIsUserId {
    async fn resolve(&self, credential: &Credential) -> Result<Option<UserId>, IdentityError> {
        match credential.as_str() {
            "anonymous" => Ok(None),
            token => Ok(Some(UserId::new(token))),
        }
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub struct Cart {
    pub store: Arc<Store>,
    pub add: Arc<AddCartLineUseCaseImpl>,
    pub update: UpdateCartLineQuantityUseCaseImpl,
    pub remove: RemoveCartLineUseCaseImpl,
    pub snapshot: GetCartSnapshotUseCaseImpl,
    pub checkout: CheckoutUseCaseImpl,
}

pub fn cart() -> Cart {
    let store = Arc::new(Store::default());
    let repository = Arc::new(InMemoryCart(store.clone()));
    let catalog = Arc::new(InMemoryCatalog(store.clone()));
    let identity = Arc::new(TokenIsUserId);
    let logger = Arc::new(SilentLogger);

    Cart {
        add: Arc::new(AddCartLineUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        }),
        update: UpdateCartLineQuantityUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        },
        remove: RemoveCartLineUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        },
        snapshot: GetCartSnapshotUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog.clone(),
            identity: identity.clone(),
            logger: logger.clone(),
        },
        checkout: CheckoutUseCaseImpl {
            cart_repository: repository,
            catalog,
            checkout_repository: Arc::new(InMemoryCheckout(store.clone())),
            identity,
            logger,
        },
        store,
    }
}

pub fn as_user(user: &str) -> Option<Credential> {
    Some(Credential::new(user))
}
