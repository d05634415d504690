use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::media::model::UploadedMedia;

#[derive(Multipart)]
pub struct UploadMediaRequest {
    /// Image (jpeg, png, gif) or video (mp4, mpeg), at most 10 MiB
    pub file: Upload,
}

#[derive(Debug, Clone, Object)]
pub struct DeleteMediaRequest {
    /// Public URL returned by the upload
    pub url: String,
}

#[derive(Debug, Clone, Object)]
pub struct UploadedMediaResponse {
    pub url: String,
    /// "image" or "video"
    pub media_type: String,
}

impl From<UploadedMedia> for UploadedMediaResponse {
    fn from(media: UploadedMedia) -> Self {
        Self {
            url: media.url,
            media_type: media.media_type.to_string(),
        }
    }
}
