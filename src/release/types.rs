use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A downloadable file attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitAsset {
    #[serde(rename = "name")]
    pub file_name: String,
    #[serde(rename = "browser_download_url")]
    pub download_url: String,
}

/// A published release from the code-hosting API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRelease {
    /// Release title
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Empty when the API omits the list or sends `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<GitAsset>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GitAsset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GitAsset>>::deserialize(deserializer)?.unwrap_or_default())
}
