//! Repository for a generic content site with integer mod IDs

use tracing::{debug, warn};

use crate::repository::client::ModSiteClient;
use crate::repository::model::ModInfoModel;
use crate::repository::repository::ModRepository;

/// Message returned when the site has no mod with the requested ID
pub const NOT_FOUND_REASON: &str = "Found no mod with this ID.";

/// Mod repository backed by a content site whose mod IDs are unsigned integers
pub struct ContentSiteRepository {
    vendor_key: String,
    client: Box<dyn ModSiteClient>,
}

impl ContentSiteRepository {
    /// Creates a repository owning the given client
    pub fn new(vendor_key: impl Into<String>, client: Box<dyn ModSiteClient>) -> Self {
        Self {
            vendor_key: vendor_key.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl ModRepository for ContentSiteRepository {
    fn vendor_key(&self) -> &str {
        &self.vendor_key
    }

    async fn get_mod_info(&self, id: &str) -> ModInfoModel {
        let Ok(mod_id) = id.trim().parse::<u32>() else {
            return ModInfoModel::error(format!(
                "The value '{}' isn't a valid {} mod ID, must be an integer ID.",
                id, self.vendor_key
            ));
        };

        match self.client.fetch_mod(mod_id).await {
            Ok(Some(record)) => {
                let version = self.normalize_version(&record.version);
                debug!(
                    "Fetched {}/{}: {} {}",
                    self.vendor_key, mod_id, record.name, version
                );
                ModInfoModel::new(record.name, version, record.url)
            }
            Ok(None) => {
                debug!("No mod found for {}/{}", self.vendor_key, mod_id);
                ModInfoModel::error(NOT_FOUND_REASON)
            }
            Err(e) => {
                warn!("Failed to fetch mod {}/{}: {}", self.vendor_key, mod_id, e);
                ModInfoModel::error(e.diagnostic())
            }
        }
    }
}
