//! Latest release lookup for one configured repository

use std::sync::Arc;

use crate::error::ClientError;
use crate::release::assets::{InstallerAssets, ReleaseSummary};
use crate::release::cache::ReleaseCache;

/// Serves the download summary of one repository's newest release
pub struct LatestReleaseService {
    cache: ReleaseCache,
    assets: InstallerAssets,
    repository: String,
}

impl LatestReleaseService {
    pub fn new(
        cache: ReleaseCache,
        assets: InstallerAssets,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            assets,
            repository: repository.into(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Summarize the newest release, served from cache within the TTL
    pub async fn latest(&self) -> Result<ReleaseSummary, Arc<ClientError>> {
        let release = self.cache.get_latest_release(&self.repository).await?;
        Ok(self.assets.summarize(&release))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::client::MockReleaseApi;
    use crate::release::types::{GitAsset, GitRelease};

    const FALLBACK: &str = "https://github.com/pathoschild/SMAPI/releases";

    fn service(api: MockReleaseApi) -> LatestReleaseService {
        LatestReleaseService::new(
            ReleaseCache::with_default_ttl(Arc::new(api)),
            InstallerAssets::new("SMAPI", FALLBACK).unwrap(),
            "Pathoschild/SMAPI",
        )
    }

    #[tokio::test]
    async fn latest_summarizes_cached_release() {
        let mut api = MockReleaseApi::new();
        api.expect_get_latest_release()
            .times(1)
            .returning(|repository| {
                assert_eq!(repository, "Pathoschild/SMAPI");
                Ok(GitRelease {
                    name: Some("4.1.0".to_string()),
                    body: Some("Notes".to_string()),
                    tag_name: Some("4.1.0".to_string()),
                    published_at: None,
                    assets: vec![GitAsset {
                        file_name: "SMAPI-4.1.0-installer.zip".to_string(),
                        download_url: "https://dl/main.zip".to_string(),
                    }],
                })
            });
        let service = service(api);

        let first = service.latest().await.unwrap();
        let second = service.latest().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "4.1.0");
        assert_eq!(first.download_url, "https://dl/main.zip");
        assert_eq!(first.dev_download_url, FALLBACK);
    }

    #[tokio::test]
    async fn latest_returns_upstream_failure() {
        let mut api = MockReleaseApi::new();
        api.expect_get_latest_release()
            .returning(|repository| Err(ClientError::NotFound(repository.to_string())));

        let result = service(api).latest().await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Not found: Pathoschild/SMAPI"
        );
    }
}
