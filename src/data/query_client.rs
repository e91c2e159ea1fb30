use std::sync::Arc;

use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
use {moka::future::Cache, std::time::Duration};

use crate::config::{DF, QueryCacheConfig};
use crate::data::{FetchError, Transport};

/// Process-wide query cache. Build one at startup and hand clones to whoever fetches.
///
/// Bodies are cached per URL. Concurrent fetches of the same URL share a single request,
/// and failures are never cached. Under wasm32 there is no cache and every query goes
/// straight to the transport.
#[derive(Clone)]
pub struct QueryClient {
    transport: Arc<dyn Transport>,
    #[cfg(not(target_arch = "wasm32"))]
    cache: Cache<String, Arc<Value>>,
}

impl QueryClient {
    pub fn new(transport: Arc<dyn Transport>, config: &QueryCacheConfig) -> Self {
        #[cfg(target_arch = "wasm32")]
        let _ = config;

        Self {
            transport,
            #[cfg(not(target_arch = "wasm32"))]
            cache: Cache::builder()
                .max_capacity(config.max_capacity)
                .time_to_live(Duration::from_secs(config.time_to_live_secs))
                .build(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn fetch_query(&self, url: &str) -> Result<Arc<Value>, FetchError> {
        let transport = Arc::clone(&self.transport);
        self.cache
            .try_get_with(url.to_string(), async move {
                if DF.log_query_cache {
                    log::info!("query cache miss: {}", url);
                }
                transport.get_json(url).await.map(Arc::new)
            })
            .await
            .map_err(|e| FetchError::clone(&e))
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn fetch_query(&self, url: &str) -> Result<Arc<Value>, FetchError> {
        if DF.log_query_cache {
            log::info!("query (uncached): {}", url);
        }
        self.transport.get_json(url).await.map(Arc::new)
    }

    /// Drop the cached body for one URL.
    pub async fn invalidate(&self, url: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        self.cache.invalidate(url).await;
        if DF.log_query_cache {
            log::info!("query cache invalidated: {}", url);
        }
    }

    /// Drop every cached body.
    pub fn clear(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        self.cache.invalidate_all();
        if DF.log_query_cache {
            log::info!("query cache cleared");
        }
    }
}
