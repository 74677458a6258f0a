//! Release API trait and its GitHub implementation

#[cfg(test)]
use mockall::automock;

use tracing::{debug, warn};

use crate::config::DEFAULT_RELEASE_API_URL;
use crate::error::ClientError;
use crate::release::types::GitRelease;

/// Trait for fetching releases from a code-hosting API
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseApi: Send + Sync {
    /// Fetches the newest published release of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository as `owner/name` (e.g., "Pathoschild/SMAPI")
    async fn get_latest_release(&self, repository: &str) -> Result<GitRelease, ClientError>;
}

/// Release API implementation for the GitHub REST API
pub struct GitHubReleaseClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubReleaseClient {
    /// Creates a new GitHubReleaseClient with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent("mod-info").build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client for api.github.com
    pub fn with_default_url() -> Result<Self, ClientError> {
        Self::new(DEFAULT_RELEASE_API_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseApi for GitHubReleaseClient {
    async fn get_latest_release(&self, repository: &str) -> Result<GitRelease, ClientError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, repository);
        debug!("Fetching latest release from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(repository.to_string()));
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
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(ClientError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            ClientError::InvalidResponse(e.to_string())
        })
    }
}
