//! In-memory TTL cache for latest-release lookups
//!
//! Each key holds either a finished release with an absolute expiry, or the
//! fetch currently in flight for it. Callers that miss while a fetch is in
//! flight await that same fetch, so the upstream API is called at most once
//! per key per TTL window. Failures are handed to every waiter of the failed
//! fetch and are not cached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_RELEASE_TTL_SECS;
use crate::error::ClientError;
use crate::release::client::ReleaseApi;
use crate::release::types::GitRelease;

/// How long a fetched release is served from the cache
pub const DEFAULT_RELEASE_TTL: Duration = Duration::from_secs(DEFAULT_RELEASE_TTL_SECS);

/// Result handed to every caller waiting on the same fetch
pub type ReleaseResult = Result<Arc<GitRelease>, Arc<ClientError>>;

type SharedFetch = Shared<BoxFuture<'static, ReleaseResult>>;

enum Slot {
    Fetching(SharedFetch),
    Ready {
        release: Arc<GitRelease>,
        expires_at: Instant,
    },
}

/// Cache key for the latest release of a repository
pub fn cache_key(repository: &str) -> String {
    format!("latest-release:{}", repository)
}

pub struct ReleaseCache {
    api: Arc<dyn ReleaseApi>,
    ttl: Duration,
    slots: Mutex<HashMap<String, Slot>>,
}

impl ReleaseCache {
    pub fn new(api: Arc<dyn ReleaseApi>, ttl: Duration) -> Self {
        Self {
            api,
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl(api: Arc<dyn ReleaseApi>) -> Self {
        Self::new(api, DEFAULT_RELEASE_TTL)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// A panic while holding the lock can't leave a slot half-written, so the
    /// map stays usable after poisoning.
    fn lock_slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the latest release of `repository`, fetching it only on a miss
    pub async fn get_latest_release(&self, repository: &str) -> ReleaseResult {
        let key = cache_key(repository);

        let fetch = {
            let mut slots = self.lock_slots();
            match slots.get(&key) {
                Some(Slot::Ready {
                    release,
                    expires_at,
                }) if Instant::now() < *expires_at => {
                    debug!("Cache hit for {}", key);
                    return Ok(Arc::clone(release));
                }
                Some(Slot::Fetching(fetch)) => {
                    debug!("Joining in-flight fetch for {}", key);
                    fetch.clone()
                }
                _ => {
                    info!("Cache miss for {}, fetching from upstream", key);
                    Self::evict_expired(&mut slots);
                    let fetch = self.start_fetch(repository);
                    slots.insert(key.clone(), Slot::Fetching(fetch.clone()));
                    fetch
                }
            }
        };

        let result = fetch.clone().await;
        self.settle(&key, &fetch, &result);
        result
    }

    /// Number of keys holding a cached or in-flight entry
    pub fn len(&self) -> usize {
        self.lock_slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expired entries are dropped whenever a miss starts a new fetch, so the
    /// map never holds more than the keys read within the last TTL window.
    fn evict_expired(slots: &mut HashMap<String, Slot>) {
        let now = Instant::now();
        slots.retain(|_, slot| match slot {
            Slot::Ready { expires_at, .. } => now < *expires_at,
            Slot::Fetching(_) => true,
        });
    }

    /// Drop any cached or in-flight entry for `repository`
    pub fn invalidate(&self, repository: &str) {
        self.lock_slots().remove(&cache_key(repository));
    }

    fn start_fetch(&self, repository: &str) -> SharedFetch {
        let api = Arc::clone(&self.api);
        let repository = repository.to_string();
        async move {
            api.get_latest_release(&repository)
                .await
                .map(Arc::new)
                .map_err(Arc::new)
        }
        .boxed()
        .shared()
    }

    /// Replace the in-flight slot with its outcome. Only the first waiter to
    /// finish does this; later waiters find the slot already settled.
    fn settle(&self, key: &str, fetch: &SharedFetch, result: &ReleaseResult) {
        let mut slots = self.lock_slots();
        let owns_slot = matches!(
            slots.get(key),
            Some(Slot::Fetching(current)) if current.ptr_eq(fetch)
        );
        if !owns_slot {
            return;
        }

        match result {
            Ok(release) => {
                slots.insert(
                    key.to_string(),
                    Slot::Ready {
                        release: Arc::clone(release),
                        expires_at: Instant::now() + self.ttl,
                    },
                );
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", key, e);
                slots.remove(key);
            }
        }
    }
}
