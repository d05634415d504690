use anyhow::Context;
use std::env;

/// Configuration for the Supabase Storage bucket holding product media.
///
/// Environment variables:
/// - SUPABASE_URL: Project base URL (required)
/// - SUPABASE_SERVICE_KEY: Service role key (required)
/// - STORAGE_BUCKET: Bucket name (default: "product-images")
pub struct StorageConfig {
    pub base_url: String,
    pub service_key: String,
    pub bucket: String,
}

impl StorageConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            base_url: env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?,
            service_key: env::var("SUPABASE_SERVICE_KEY")
                .context("SUPABASE_SERVICE_KEY must be set")?,
            bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| "product-images".to_string()),
        })
    }
}
