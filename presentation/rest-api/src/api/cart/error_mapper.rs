use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "cart.unauthenticated",
            ),
            CartError::OutOfStock => (StatusCode::CONFLICT, "Conflict", "cart.out_of_stock"),
            CartError::EmptyCart => (StatusCode::CONFLICT, "Conflict", "cart.empty"),
            CartError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.not_found"),
            CartError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "cart.product_not_found",
            ),
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::InvalidPaymentMethod => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_payment_method",
            ),
            CartError::UpstreamFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "cart.upstream_failure",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use business::domain::errors::RepositoryError;

    use super::*;

    #[test]
    fn should_map_stock_conflicts_to_409() {
        let (status, body) = CartError::OutOfStock.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "cart.out_of_stock");
    }

    #[test]
    fn should_map_missing_identity_to_401() {
        let (status, _) = CartError::Unauthenticated.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn should_map_upstream_failure_to_generic_notice() {
        let err = CartError::from(RepositoryError::DatabaseError);

        let (status, body) = err.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "cart.upstream_failure");
    }
}
