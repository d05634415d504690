use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.product_not_found",
            ),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "catalog.upstream_failure",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
