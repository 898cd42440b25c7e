//! npm registry API implementation

use std::time::Duration;

use crate::error::FetchError;
use crate::metadata::PackageMetadata;
use crate::registry::Registry;
use tracing::{debug, warn};

/// Default base URL for npm registry
pub const DEFAULT_BASE_URL: &str = "https://registry.npmjs.org";

/// Registry implementation for npm registry API
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self::build(base_url, None)
    }

    /// Creates a new NpmRegistry whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder().user_agent("npm-deps");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn package_url(&self, package_name: &str) -> String {
        format!("{}/{}", self.base_url, package_name)
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_package(&self, package_name: &str) -> Result<PackageMetadata, FetchError> {
        let url = self.package_url(package_name);
        debug!("Fetching npm package: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(package_name.to_string()));
        }

        if status != reqwest::StatusCode::OK {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(FetchError::UnexpectedStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            FetchError::MalformedResponse(e.to_string())
        })
    }
}
