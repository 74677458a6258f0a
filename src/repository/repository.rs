//! Repository trait for looking up mod metadata on a mod site

use crate::repository::model::ModInfoModel;
use crate::repository::version;

/// Trait for fetching normalized mod metadata from one mod site
///
/// Implementations never fail: invalid IDs, missing mods and transport
/// failures are all reported through [`ModInfoModel::error`].
///
/// Each implementation owns its client; dropping the repository releases the
/// client's connections.
#[async_trait::async_trait]
pub trait ModRepository: Send + Sync {
    /// Returns the vendor key this repository is registered under
    fn vendor_key(&self) -> &str;

    /// Fetches metadata about a mod
    ///
    /// # Arguments
    /// * `id` - The mod ID in this repository, as supplied by the caller
    async fn get_mod_info(&self, id: &str) -> ModInfoModel;

    /// Normalizes a version string returned by the site
    ///
    /// Default implementation uses [`version::normalize_version`].
    fn normalize_version(&self, version: &str) -> String {
        version::normalize_version(version)
    }
}
