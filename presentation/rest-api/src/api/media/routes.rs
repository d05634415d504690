use std::sync::Arc;

use poem::middleware::SizeLimit;
use poem::{Endpoint, EndpointExt};
use poem_openapi::{OpenApi, payload::Json};

use business::domain::media::model::MAX_FILE_SIZE;
use business::domain::media::use_cases::delete::{DeleteMediaParams, DeleteMediaUseCase};
use business::domain::media::use_cases::upload::{UploadMediaParams, UploadMediaUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::media::dto::{DeleteMediaRequest, UploadMediaRequest, UploadedMediaResponse};
use crate::api::security::OptionalFirebaseBearer;
use crate::api::tags::ApiTags;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Room for multipart boundaries and part headers around the file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Refuses upload bodies that announce more than one file can hold before
/// any of it is buffered. Bodies without a `Content-Length` get 411.
fn limit_upload_body(ep: impl Endpoint) -> impl Endpoint {
    ep.with(SizeLimit::new(MAX_FILE_SIZE + MULTIPART_OVERHEAD))
}

fn too_large() -> UploadMediaResponse {
    UploadMediaResponse::PayloadTooLarge(Json(ErrorResponse::new(
        "PayloadTooLarge",
        "media.too_large",
    )))
}

pub struct MediaApi {
    upload_use_case: Arc<dyn UploadMediaUseCase>,
    delete_use_case: Arc<dyn DeleteMediaUseCase>,
}

impl MediaApi {
    pub fn new(
        upload_use_case: Arc<dyn UploadMediaUseCase>,
        delete_use_case: Arc<dyn DeleteMediaUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            delete_use_case,
        }
    }
}

/// Product media API
///
/// Uploads and removes images and videos attached to listings.
#[OpenApi]
impl MediaApi {
    /// Upload a media file
    ///
    /// Accepts a multipart `file` field and returns its public URL.
    #[oai(
        path = "/media",
        method = "post",
        tag = "ApiTags::Media",
        transform = "limit_upload_body"
    )]
    async fn upload(
        &self,
        auth: OptionalFirebaseBearer,
        body: UploadMediaRequest,
    ) -> UploadMediaResponse {
        let file = body.file;
        if file.size() > MAX_FILE_SIZE {
            return too_large();
        }

        let file_name = file.file_name().unwrap_or_default().to_string();
        let content_type = file
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = match file.into_vec().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("media.read_failed: {e}");
                return UploadMediaResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "media.read_failed",
                )));
            }
        };

        let params = UploadMediaParams {
            credential: auth.into_credential(),
            file_name,
            content_type,
            bytes,
        };

        match self.upload_use_case.execute(params).await {
            Ok(media) => UploadMediaResponse::Created(Json(media.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UploadMediaResponse::BadRequest(json),
                    401 => UploadMediaResponse::Unauthorized(json),
                    413 => UploadMediaResponse::PayloadTooLarge(json),
                    415 => UploadMediaResponse::UnsupportedMediaType(json),
                    _ => UploadMediaResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a media file
    ///
    /// Removes a file the caller uploaded, by its public URL.
    #[oai(path = "/media", method = "delete", tag = "ApiTags::Media")]
    async fn delete(
        &self,
        auth: OptionalFirebaseBearer,
        body: Json<DeleteMediaRequest>,
    ) -> DeleteMediaResponse {
        let params = DeleteMediaParams {
            credential: auth.into_credential(),
            url: body.0.url,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteMediaResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteMediaResponse::BadRequest(json),
                    401 => DeleteMediaResponse::Unauthorized(json),
                    403 => DeleteMediaResponse::Forbidden(json),
                    _ => DeleteMediaResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadMediaResponse {
    #[oai(status = 201)]
    Created(Json<UploadedMediaResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 413)]
    PayloadTooLarge(Json<ErrorResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteMediaResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use business::domain::catalog::model::MediaType;
    use business::domain::media::errors::MediaError;
    use business::domain::media::model::UploadedMedia;

    use super::*;

    mock! {
        pub Upload {}
        #[async_trait]
        impl UploadMediaUseCase for Upload {
            async fn execute(&self, params: UploadMediaParams) -> Result<UploadedMedia, MediaError>;
        }
    }

    mock! {
        pub Delete {}
        #[async_trait]
        impl DeleteMediaUseCase for Delete {
            async fn execute(&self, params: DeleteMediaParams) -> Result<(), MediaError>;
        }
    }

    const BOUNDARY: &str = "media-test-boundary";

    fn multipart_file(file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn client(upload: MockUpload, delete: MockDelete) -> TestClient<Route> {
        let api = MediaApi::new(Arc::new(upload), Arc::new(delete));
        let service = OpenApiService::new(api, "test", "1.0");
        TestClient::new(Route::new().nest("/", service))
    }

    fn untouched_upload() -> MockUpload {
        let mut upload = MockUpload::new();
        upload.expect_execute().never();
        upload
    }

    fn untouched_delete() -> MockDelete {
        let mut delete = MockDelete::new();
        delete.expect_execute().never();
        delete
    }

    #[tokio::test]
    async fn should_refuse_body_announced_over_limit_before_reading_it() {
        let body = multipart_file("a.png", "image/png", b"png");

        let response = client(untouched_upload(), untouched_delete())
            .post("/media")
            .header("Authorization", "Bearer id-token")
            .content_type(format!("multipart/form-data; boundary={BOUNDARY}"))
            .header(
                "Content-Length",
                (MAX_FILE_SIZE + MULTIPART_OVERHEAD + 1).to_string(),
            )
            .body(body)
            .send()
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn should_refuse_file_one_byte_over_ceiling() {
        let body = multipart_file("a.png", "image/png", &vec![7u8; MAX_FILE_SIZE + 1]);

        let response = client(untouched_upload(), untouched_delete())
            .post("/media")
            .header("Authorization", "Bearer id-token")
            .content_type(format!("multipart/form-data; boundary={BOUNDARY}"))
            .header("Content-Length", body.len().to_string())
            .body(body)
            .send()
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        response
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("media.too_large");
    }

    #[tokio::test]
    async fn should_hand_small_file_and_credential_to_use_case() {
        let mut upload = MockUpload::new();
        upload
            .expect_execute()
            .withf(|params| {
                params.credential.as_ref().map(|c| c.as_str()) == Some("id-token")
                    && params.file_name == "a.png"
                    && params.content_type == "image/png"
                    && params.bytes == b"png-bytes"
            })
            .times(1)
            .returning(|_| {
                Ok(UploadedMedia {
                    url: "https://cdn.test/media/buyer/vuata_x.png".to_string(),
                    media_type: MediaType::Image,
                })
            });
        let body = multipart_file("a.png", "image/png", b"png-bytes");

        let response = client(upload, untouched_delete())
            .post("/media")
            .header("Authorization", "Bearer id-token")
            .content_type(format!("multipart/form-data; boundary={BOUNDARY}"))
            .header("Content-Length", body.len().to_string())
            .body(body)
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        response
            .json()
            .await
            .value()
            .object()
            .get("url")
            .assert_string("https://cdn.test/media/buyer/vuata_x.png");
    }

    #[tokio::test]
    async fn should_answer_403_when_deleting_someone_elses_file() {
        let mut delete = MockDelete::new();
        delete
            .expect_execute()
            .times(1)
            .returning(|_| Err(MediaError::Forbidden));

        let response = client(untouched_upload(), delete)
            .delete("/media")
            .header("Authorization", "Bearer buyer-b")
            .content_type("application/json")
            .body(r#"{"url": "https://cdn.test/media/buyer-a/vuata_x.png"}"#)
            .send()
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }
}
