use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::media::errors::MediaError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MediaError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MediaError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "media.unauthenticated",
            ),
            MediaError::UnsupportedType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UnsupportedMediaType",
                "media.unsupported_type",
            ),
            MediaError::TooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PayloadTooLarge",
                "media.too_large",
            ),
            MediaError::EmptyFile => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "media.empty_file",
            ),
            MediaError::InvalidUrl => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "media.invalid_url",
            ),
            MediaError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "media.forbidden"),
            MediaError::Upstream(_) | MediaError::Identity(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "media.upload_failed",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
