//! Routes lookups to the mod repository registered for a vendor key

use futures::future::join_all;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::repository::model::ModInfoModel;
use crate::repository::repository::ModRepository;

/// Mod repositories keyed by vendor key, in registration order
///
/// Vendor keys match case-insensitively.
#[derive(Default)]
pub struct ModRepositories {
    repositories: IndexMap<String, Box<dyn ModRepository>>,
}

impl ModRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repository under its own vendor key, replacing any previous one
    pub fn register(&mut self, repository: Box<dyn ModRepository>) {
        let key = repository.vendor_key().to_lowercase();
        debug!("Registering mod repository {}", repository.vendor_key());
        self.repositories.insert(key, repository);
    }

    /// Builder-style variant of [`Self::register`]
    pub fn with(mut self, repository: Box<dyn ModRepository>) -> Self {
        self.register(repository);
        self
    }

    /// Vendor keys of all registered repositories, in registration order
    pub fn vendor_keys(&self) -> Vec<&str> {
        self.repositories.values().map(|r| r.vendor_key()).collect()
    }

    pub fn get(&self, vendor_key: &str) -> Option<&dyn ModRepository> {
        self.repositories
            .get(&vendor_key.to_lowercase())
            .map(|r| r.as_ref())
    }

    /// Fetch mod metadata from the repository registered for `vendor_key`
    pub async fn get_mod_info(&self, vendor_key: &str, id: &str) -> ModInfoModel {
        match self.get(vendor_key) {
            Some(repository) => repository.get_mod_info(id).await,
            None => {
                warn!("No mod repository registered for {}", vendor_key);
                ModInfoModel::error(format!(
                    "There's no mod site with key '{}'. Expected one of [{}].",
                    vendor_key,
                    self.vendor_keys().join(", ")
                ))
            }
        }
    }

    /// Fetch several mods concurrently; results keep the order of `requests`
    pub async fn get_mod_infos(&self, requests: &[(&str, &str)]) -> Vec<ModInfoModel> {
        join_all(
            requests
                .iter()
                .map(|(vendor_key, id)| self.get_mod_info(vendor_key, id)),
        )
        .await
    }
}
