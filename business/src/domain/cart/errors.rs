use crate::domain::errors::{RepositoryError, UpstreamError};
use crate::domain::identity::errors::IdentityError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.unauthenticated")]
    Unauthenticated,
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.empty")]
    EmptyCart,
    #[error("cart.invalid_payment_method")]
    InvalidPaymentMethod,
    #[error("cart.upstream_failure")]
    UpstreamFailure(#[source] UpstreamError),
}

impl From<RepositoryError> for CartError {
    fn from(err: RepositoryError) -> Self {
        CartError::UpstreamFailure(err.into())
    }
}

impl From<IdentityError> for CartError {
    fn from(err: IdentityError) -> Self {
        CartError::UpstreamFailure(err.into())
    }
}
