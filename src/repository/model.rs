//! Normalized result of a mod metadata lookup

use serde::Serialize;

/// Metadata about a mod, or the reason it couldn't be fetched
///
/// Exactly one state holds: either `error_reason` is set and the other fields
/// are absent, or `error_reason` is absent and `name`, `version` and `url`
/// carry the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModInfoModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_reason: Option<String>,
}

impl ModInfoModel {
    /// Creates a successful lookup result
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            url: Some(url.into()),
            error_reason: None,
        }
    }

    /// Creates a failed lookup result
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            name: None,
            version: None,
            url: None,
            error_reason: Some(reason.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn error_reason(&self) -> Option<&str> {
        self.error_reason.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.error_reason.is_some()
    }
}
