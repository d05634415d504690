use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::checkout::model::CheckoutSession;
use crate::domain::shared::value_objects::Credential;

pub struct CheckoutParams {
    pub credential: Option<Credential>,
    pub payment_method: String,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutSession, CartError>;
}
