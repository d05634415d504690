use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use business::domain::media::errors::StorageError;
use business::domain::media::storage::MediaStorage;

use crate::client::SupabaseClient;

pub struct SupabaseStorage {
    client: SupabaseClient,
}

impl SupabaseStorage {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn classify(status: StatusCode) -> StorageError {
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            StorageError::Transient
        } else {
            StorageError::Rejected
        }
    }

    fn network_error(e: reqwest::Error) -> StorageError {
        tracing::warn!("storage.request_failed: {e}");
        StorageError::Transient
    }
}

#[async_trait]
impl MediaStorage for SupabaseStorage {
    async fn put(&self, key: &str, content_type: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let response = self
            .client
            .client
            .post(self.client.object_url(key))
            .header("Authorization", self.client.auth_header())
            .header("apikey", &self.client.service_key)
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(Self::network_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("storage.upload_failed for {key}: {status}");
            return Err(Self::classify(status));
        }

        Ok(format!("{}{}", self.client.public_prefix(), key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .client
            .delete(self.client.bucket_url())
            .header("Authorization", self.client.auth_header())
            .header("apikey", &self.client.service_key)
            .json(&json!({ "prefixes": [key] }))
            .send()
            .await
            .map_err(Self::network_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("storage.delete_failed for {key}: {status}");
            return Err(Self::classify(status));
        }

        Ok(())
    }

    fn key_for_url(&self, public_url: &str) -> Option<String> {
        let prefix = self.client.public_prefix();
        let key = public_url.strip_prefix(prefix.as_str())?;
        let key = key.split(['?', '#']).next().unwrap_or_default();
        if key.is_empty() {
            return None;
        }
        Some(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> SupabaseStorage {
        SupabaseStorage::new(SupabaseClient::new(
            "https://demo.supabase.co".to_string(),
            "service-key".to_string(),
            "product-images".to_string(),
        ))
    }

    #[test]
    fn should_treat_throttling_and_server_errors_as_transient() {
        assert!(SupabaseStorage::classify(StatusCode::TOO_MANY_REQUESTS).is_transient());
        assert!(SupabaseStorage::classify(StatusCode::BAD_GATEWAY).is_transient());
        assert!(SupabaseStorage::classify(StatusCode::SERVICE_UNAVAILABLE).is_transient());
    }

    #[test]
    fn should_treat_client_errors_as_rejected() {
        assert!(!SupabaseStorage::classify(StatusCode::BAD_REQUEST).is_transient());
        assert!(!SupabaseStorage::classify(StatusCode::FORBIDDEN).is_transient());
        assert!(!SupabaseStorage::classify(StatusCode::PAYLOAD_TOO_LARGE).is_transient());
    }

    #[test]
    fn should_map_public_url_back_to_key() {
        let key = storage().key_for_url(
            "https://demo.supabase.co/storage/v1/object/public/product-images/media/2026-01-02_abc.png",
        );

        assert_eq!(key.as_deref(), Some("media/2026-01-02_abc.png"));
    }

    #[test]
    fn should_ignore_query_string_when_mapping_url() {
        let key = storage().key_for_url(
            "https://demo.supabase.co/storage/v1/object/public/product-images/media/a.png?t=1",
        );

        assert_eq!(key.as_deref(), Some("media/a.png"));
    }

    #[test]
    fn should_not_map_foreign_urls() {
        let storage = storage();

        assert!(storage.key_for_url("https://elsewhere.example/media/a.png").is_none());
        assert!(
            storage
                .key_for_url("https://demo.supabase.co/storage/v1/object/public/other-bucket/a.png")
                .is_none()
        );
        assert!(
            storage
                .key_for_url("https://demo.supabase.co/storage/v1/object/public/product-images/")
                .is_none()
        );
    }
}
