//! Mod site client test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use mod_info::error::ClientError;
use mod_info::repository::client::{ModRecord, ModSiteClient};

/// Stub mod site serving a fixed set of records
#[derive(Default)]
pub struct StubModSiteClient {
    records: HashMap<u32, ModRecord>,
    failure: Option<String>,
    drops: Option<Arc<AtomicUsize>>,
}

impl StubModSiteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mod(mut self, id: u32, name: &str, version: &str, url: &str) -> Self {
        self.records.insert(
            id,
            ModRecord {
                id,
                name: name.to_string(),
                version: version.to_string(),
                url: url.to_string(),
            },
        );
        self
    }

    /// Fail every fetch with an invalid response carrying `message`
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Count drops of this client into `counter`
    pub fn tracking_drops(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.drops = Some(counter);
        self
    }
}

impl Drop for StubModSiteClient {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl ModSiteClient for StubModSiteClient {
    async fn fetch_mod(&self, id: u32) -> Result<Option<ModRecord>, ClientError> {
        if let Some(message) = &self.failure {
            return Err(ClientError::InvalidResponse(message.clone()));
        }
        Ok(self.records.get(&id).cloned())
    }
}
