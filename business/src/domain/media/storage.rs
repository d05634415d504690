use async_trait::async_trait;

use super::errors::StorageError;

/// Object storage holding product media.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Stores `bytes` under `key` and returns the public URL.
    async fn put(&self, key: &str, content_type: &str, bytes: &[u8]) -> Result<String, StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
    /// Maps a public URL back to its key; `None` when the URL is not served by this storage.
    fn key_for_url(&self, public_url: &str) -> Option<String>;
}
