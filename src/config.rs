use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

// =============================================================================
// Defaults
// =============================================================================

/// How long a fetched release is cached, in seconds (5 minutes)
pub const DEFAULT_RELEASE_TTL_SECS: u64 = 5 * 60;

/// Default base URL for the GitHub API
pub const DEFAULT_RELEASE_API_URL: &str = "https://api.github.com";

/// Default base URL for the content site API
pub const DEFAULT_MOD_SITE_URL: &str = "https://community.playstarbound.com/api";

/// Repository whose latest release is served
pub const DEFAULT_RELEASE_REPOSITORY: &str = "Pathoschild/SMAPI";

/// File name prefix of the installer assets
pub const DEFAULT_PRODUCT_NAME: &str = "SMAPI";

/// Returned when a release has no matching installer asset
pub const DEFAULT_FALLBACK_URL: &str = "https://github.com/pathoschild/SMAPI/releases";

/// Vendor key of the content site repository
pub const DEFAULT_CONTENT_SITE_VENDOR: &str = "Chucklefish";

/// Application configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub cache: CacheConfig,
    pub release: ReleaseConfig,
    pub repositories: RepositoriesConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file; missing fields use defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Cache-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    /// How long a fetched release is cached, in seconds
    pub release_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            release_ttl_secs: DEFAULT_RELEASE_TTL_SECS,
        }
    }
}

/// Latest release configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseConfig {
    pub base_url: String,
    /// Repository as `owner/name`
    pub repository: String,
    pub product_name: String,
    pub fallback_url: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RELEASE_API_URL.to_string(),
            repository: DEFAULT_RELEASE_REPOSITORY.to_string(),
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
        }
    }
}

/// Mod repository configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RepositoriesConfig {
    pub content_site: ContentSiteConfig,
}

/// Content site repository configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSiteConfig {
    pub enabled: bool,
    pub vendor_key: String,
    pub base_url: String,
}

impl Default for ContentSiteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            vendor_key: DEFAULT_CONTENT_SITE_VENDOR.to_string(),
            base_url: DEFAULT_MOD_SITE_URL.to_string(),
        }
    }
}

/// Returns the path to the data directory for mod-info.
/// Uses $XDG_DATA_HOME/mod-info if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/mod-info,
/// or ./mod-info if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("mod-info.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("mod-info")
}
