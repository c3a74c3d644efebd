//! Hero data service with a deduplicating client-side cache
//!
//! Single authority for all hero reads. Per query key (hero id, or
//! page/size pair) it keeps two maps: resolved values and in-flight
//! requests. A lookup walks three tiers - resolved cache, in-flight
//! request, new request - so repeat reads are served without network
//! access and concurrent reads for the same key share one outbound
//! request. Successful list fetches prefetch the first few detail
//! records in the background so opening a hero from a freshly loaded
//! page is usually instant.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;

use crate::api::HeroApi;
use crate::error::HeroResult;
use crate::models::{Hero, HeroPage};

/// Image shown when a hero has no usable image URL (or there is no hero)
pub const PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.jpg";

/// How many detail records to prefetch after a successful list fetch
const PREFETCH_COUNT: usize = 3;

/// A pending fetch that any number of callers can await; every attached
/// caller receives a clone of the same settled outcome.
type SharedFetch<T> = Shared<BoxFuture<'static, HeroResult<T>>>;

/// Cache key for list queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PageKey {
    page: u32,
    size: u32,
}

#[derive(Default)]
struct CacheState {
    /// Resolved hero details by id
    heroes: HashMap<u32, Hero>,
    /// Resolved list pages by (page, size)
    pages: HashMap<PageKey, HeroPage>,
    /// Detail requests not yet settled
    heroes_pending: HashMap<u32, SharedFetch<Hero>>,
    /// List requests not yet settled
    pages_pending: HashMap<PageKey, SharedFetch<HeroPage>>,
}

/// Caching hero data service. Cheap to clone; clones share one cache.
#[derive(Clone)]
pub struct HeroService {
    inner: Arc<Inner>,
}

struct Inner {
    api: HeroApi,
    state: Mutex<CacheState>,
}

impl HeroService {
    pub fn new(api: HeroApi) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                state: Mutex::new(CacheState::default()),
            }),
        }
    }

    /// Fetch one page of heroes, served from cache when possible.
    ///
    /// Concurrent calls for the same (page, size) share a single outbound
    /// request and all observe the same outcome. After a successful fetch
    /// the first few heroes of the page are prefetched in the background.
    pub async fn fetch_heroes(&self, page: u32, size: u32) -> HeroResult<HeroPage> {
        let key = PageKey { page, size };

        // The three tiers are checked and the pending entry registered
        // under one lock acquisition, with no await in between: no other
        // caller can slip in a second request for the same key.
        let pending = {
            let mut state = self.inner.state.lock().unwrap();

            if let Some(hit) = state.pages.get(&key) {
                log::debug!("List cache hit: page={} size={}", page, size);
                return Ok(hit.clone());
            }

            if let Some(pending) = state.pages_pending.get(&key) {
                log::debug!("Joining in-flight list request: page={} size={}", page, size);
                pending.clone()
            } else {
                let service = self.clone();
                let fetch_key = key.clone();
                let fetch = async move {
                    let result = service
                        .inner
                        .api
                        .fetch_heroes(fetch_key.page, fetch_key.size)
                        .await;
                    {
                        let mut state = service.inner.state.lock().unwrap();
                        if let Ok(page) = &result {
                            state.pages.insert(fetch_key.clone(), page.clone());
                        }
                        state.pages_pending.remove(&fetch_key);
                    }
                    if let Ok(page) = &result {
                        service.prefetch_details(&page.items);
                    }
                    result
                }
                .boxed()
                .shared();
                state.pages_pending.insert(key, fetch.clone());
                fetch
            }
        };

        pending.await
    }

    /// Fetch a single hero by id, served from cache when possible.
    ///
    /// Same three-tier strategy as [`fetch_heroes`](Self::fetch_heroes),
    /// keyed by id alone. A failed fetch leaves no cache entry, so the
    /// next call retries from scratch.
    pub async fn fetch_hero(&self, id: u32) -> HeroResult<Hero> {
        let pending = {
            let mut state = self.inner.state.lock().unwrap();

            if let Some(hit) = state.heroes.get(&id) {
                log::debug!("Detail cache hit: id={}", id);
                return Ok(hit.clone());
            }

            if let Some(pending) = state.heroes_pending.get(&id) {
                log::debug!("Joining in-flight detail request: id={}", id);
                pending.clone()
            } else {
                let service = self.clone();
                let fetch = async move {
                    let result = service.inner.api.fetch_hero(id).await;
                    let mut state = service.inner.state.lock().unwrap();
                    if let Ok(hero) = &result {
                        state.heroes.insert(id, hero.clone());
                    }
                    state.heroes_pending.remove(&id);
                    result
                }
                .boxed()
                .shared();
                state.heroes_pending.insert(id, fetch.clone());
                fetch
            }
        };

        pending.await
    }

    /// Get a hero from the resolved cache without touching the network.
    ///
    /// Used by the detail view for instant rendering before falling back
    /// to [`fetch_hero`](Self::fetch_hero).
    pub fn hero_from_cache(&self, id: u32) -> Option<Hero> {
        self.inner.state.lock().unwrap().heroes.get(&id).cloned()
    }

    /// Empty all four caches.
    ///
    /// Requests already in flight still settle and may repopulate the
    /// resolved caches with their results.
    pub fn clear_cache(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.heroes.clear();
        state.pages.clear();
        state.heroes_pending.clear();
        state.pages_pending.clear();
        log::debug!("Cleared all hero caches");
    }

    /// Kick off background detail fetches for the first few heroes of a
    /// freshly loaded page. Best-effort: failures are logged and swallowed,
    /// never surfaced to the list caller, and nothing retries.
    fn prefetch_details(&self, heroes: &[Hero]) {
        for hero in heroes.iter().take(PREFETCH_COUNT) {
            let id = hero.id;
            if self.hero_from_cache(id).is_some() {
                continue;
            }
            log::debug!("Prefetching hero detail: id={}", id);
            let service = self.clone();
            tokio::spawn(async move {
                if let Err(e) = service.fetch_hero(id).await {
                    log::warn!("Prefetch failed for hero {}: {}", id, e);
                }
            });
        }
    }
}

impl Default for HeroService {
    fn default() -> Self {
        Self::new(HeroApi::default())
    }
}

/// Get the image URL to display for a hero, or the placeholder when the
/// hero is absent or has no image at any resolution.
pub fn image_url(hero: Option<&Hero>) -> &str {
    hero.and_then(Hero::image_url).unwrap_or(PLACEHOLDER_IMAGE)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
