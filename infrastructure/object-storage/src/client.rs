use reqwest::Client;

/// Shared blob store HTTP client configuration.
pub struct ObjectStorageClient {
    pub client: Client,
    pub base_url: String,
}

impl ObjectStorageClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the public, fetchable URL of an object.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Derives the storage key back out of a public URL, the inverse of
    /// `object_url`. Returns `None` for URLs that do not belong to this
    /// store.
    pub fn key_for_url(&self, url: &str) -> Option<String> {
        let parsed = url::Url::parse(url).ok()?;
        let base = url::Url::parse(&self.base_url).ok()?;
        if parsed.host_str() != base.host_str() {
            return None;
        }
        url.strip_prefix(&self.base_url)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|key| !key.is_empty())
    }
}
