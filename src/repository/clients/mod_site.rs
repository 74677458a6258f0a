//! HTTP client for a generic mod site JSON API

use tracing::{debug, warn};

use crate::config::DEFAULT_MOD_SITE_URL;
use crate::error::ClientError;
use crate::repository::client::{ModRecord, ModSiteClient};

/// Client implementation for a mod site exposing `GET /mods/{id}`
pub struct HttpModSiteClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpModSiteClient {
    /// Creates a new HttpModSiteClient with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent("mod-info").build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client for the default mod site
    pub fn with_default_url() -> Result<Self, ClientError> {
        Self::new(DEFAULT_MOD_SITE_URL)
    }
}

#[async_trait::async_trait]
impl ModSiteClient for HttpModSiteClient {
    async fn fetch_mod(&self, id: u32) -> Result<Option<ModRecord>, ClientError> {
        let url = format!("{}/mods/{}", self.base_url, id);
        debug!("Fetching mod {} from {}", id, url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(ClientError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Mod site returned status {}: {}", status, url);
            return Err(ClientError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let record: ModRecord = response.json().await.map_err(|e| {
            warn!("Failed to parse mod site response: {}", e);
            ClientError::InvalidResponse(e.to_string())
        })?;

        Ok(Some(record))
    }
}
