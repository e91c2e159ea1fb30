use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::watch;

use crate::config::DF;
use crate::data::{FetchError, QueryClient};
use crate::shared::Observable;
use crate::utils::spawn;

/// Lifecycle of one fetch. Data and error can never coexist, and neither exists
/// while loading.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

// Every endpoint we talk to wraps its payload as `{ "data": ... }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

pub(crate) fn decode_payload<T: DeserializeOwned>(url: &str, body: &Value) -> Result<T, FetchError> {
    Envelope::<T>::deserialize(body)
        .map(|envelope| envelope.data)
        .map_err(|e| FetchError::BadShape {
            url: url.to_string(),
            message: e.to_string(),
        })
}

/// One GET against `url` and its observable outcome.
///
/// Starts in [`FetchState::Loading`]. [`FetchHandle::mount`] issues the request exactly
/// once per handle; clones share state and the mount guard.
pub struct FetchHandle<T> {
    url: Arc<str>,
    client: QueryClient,
    state: Observable<FetchState<T>>,
    mounted: Arc<AtomicBool>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            url: Arc::clone(&self.url),
            client: self.client.clone(),
            state: self.state.clone(),
            mounted: Arc::clone(&self.mounted),
        }
    }
}

/// Build an unmounted fetch handle for `url` that goes through `client`.
pub fn use_fetch_data<T>(client: QueryClient, url: impl Into<String>) -> FetchHandle<T> {
    let url: String = url.into();
    FetchHandle {
        url: Arc::from(url),
        client,
        state: Observable::new(FetchState::Loading),
        mounted: Arc::new(AtomicBool::new(false)),
    }
}

impl<T> FetchHandle<T> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(FetchState::is_loading)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }
}

impl<T: Clone> FetchHandle<T> {
    pub fn state(&self) -> FetchState<T> {
        self.state.get()
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data().cloned())
    }

    pub fn error(&self) -> Option<FetchError> {
        self.state.with(|s| s.error().cloned())
    }
}

impl<T> FetchHandle<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Issue the request and publish its outcome. Never called implicitly except
    /// by the first [`mount`](Self::mount).
    pub async fn fetch(&self) {
        if DF.log_fetch {
            log::info!("GET {}", self.url);
        }

        let outcome = self
            .client
            .fetch_query(&self.url)
            .await
            .and_then(|body| decode_payload::<T>(&self.url, &body));

        let next = match outcome {
            Ok(data) => {
                if DF.log_fetch {
                    log::info!("GET {} settled", self.url);
                }
                FetchState::Loaded(data)
            }
            Err(err) => {
                log::warn!("Fetch failed: {}", err);
                FetchState::Failed(err)
            }
        };
        self.state.set(next);
    }

    /// Start the request in the background. Only the first call on a handle (or any of
    /// its clones) does anything; returns whether this call started it.
    pub fn mount(&self) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }
        let this = self.clone();
        spawn(async move { this.fetch().await });
        true
    }
}
