//! Installer download URL extraction from release assets

use regex::Regex;
use serde::Serialize;

use crate::release::types::GitRelease;

/// What a download page shows for a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSummary {
    pub name: String,
    pub body: String,
    pub download_url: String,
    pub dev_download_url: String,
}

/// Finds the installer downloads of a product among a release's assets
///
/// Matches `<product>-<version>-installer.zip` and
/// `<product>-<version>-installer-for-developers.zip`, where version is a
/// run of digits and dots. Both patterns are anchored, so neither file name
/// satisfies the other pattern.
#[derive(Debug, Clone)]
pub struct InstallerAssets {
    main_pattern: Regex,
    dev_pattern: Regex,
    fallback_url: String,
}

impl InstallerAssets {
    /// # Arguments
    /// * `product` - File name prefix (e.g., "SMAPI")
    /// * `fallback_url` - Returned when no asset matches, usually the releases page
    pub fn new(product: &str, fallback_url: impl Into<String>) -> Result<Self, regex::Error> {
        let product = regex::escape(product);
        Ok(Self {
            main_pattern: Regex::new(&format!(r"^{}-[\d.]+-installer\.zip$", product))?,
            dev_pattern: Regex::new(&format!(
                r"^{}-[\d.]+-installer-for-developers\.zip$",
                product
            ))?,
            fallback_url: fallback_url.into(),
        })
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Download URL of the main installer, or the fallback URL
    pub fn main_download_url<'a>(&'a self, release: &'a GitRelease) -> &'a str {
        self.find(release, &self.main_pattern)
    }

    /// Download URL of the for-developers installer, or the fallback URL
    pub fn dev_download_url<'a>(&'a self, release: &'a GitRelease) -> &'a str {
        self.find(release, &self.dev_pattern)
    }

    pub fn summarize(&self, release: &GitRelease) -> ReleaseSummary {
        ReleaseSummary {
            name: release.name.clone().unwrap_or_default(),
            body: release.body.clone().unwrap_or_default(),
            download_url: self.main_download_url(release).to_string(),
            dev_download_url: self.dev_download_url(release).to_string(),
        }
    }

    fn find<'a>(&'a self, release: &'a GitRelease, pattern: &Regex) -> &'a str {
        release
            .assets
            .iter()
            .find(|asset| pattern.is_match(&asset.file_name))
            .map(|asset| asset.download_url.as_str())
            .unwrap_or(self.fallback_url.as_str())
    }
}
