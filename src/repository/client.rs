//! Client trait for fetching mod records from a mod site

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;

use crate::error::ClientError;

/// A mod record as returned by a mod site
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModRecord {
    pub id: u32,
    pub name: String,
    /// Free-form version string as published by the mod author
    pub version: String,
    pub url: String,
}

/// Trait for fetching mod records from a mod site API
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ModSiteClient: Send + Sync {
    /// Fetches a mod by its numeric ID
    ///
    /// # Returns
    /// * `Ok(Some(ModRecord))` - The mod exists
    /// * `Ok(None)` - The site has no mod with this ID
    /// * `Err(ClientError)` - If the fetch fails
    async fn fetch_mod(&self, id: u32) -> Result<Option<ModRecord>, ClientError>;
}
