use reqwest::Client;

/// Shared Supabase Storage HTTP client configuration.
pub struct SupabaseClient {
    pub client: Client,
    pub service_key: String,
    pub base_url: String,
    pub bucket: String,
}

impl SupabaseClient {
    pub fn new(base_url: String, service_key: String, bucket: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            service_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
        }
    }

    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.service_key)
    }

    /// Endpoint for uploading an object under `key`.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    /// Endpoint for bulk-removing objects from the bucket.
    pub fn bucket_url(&self) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, self.bucket)
    }

    pub fn public_prefix(&self) -> String {
        format!(
            "{}/storage/v1/object/public/{}/",
            self.base_url, self.bucket
        )
    }
}
