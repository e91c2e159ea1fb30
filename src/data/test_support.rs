// Test doubles for the transport seam.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::data::{FetchError, Transport};

/// Answers every GET with the same canned outcome and counts the calls.
pub(crate) struct FakeTransport {
    outcome: Result<Value, FetchError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeTransport {
    pub(crate) fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self::new(Ok(body)))
    }

    pub(crate) fn failing(err: FetchError) -> Arc<Self> {
        Arc::new(Self::new(Err(err)))
    }

    fn new(outcome: Result<Value, FetchError>) -> Self {
        Self {
            outcome,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Rebuild with a response delay, so concurrent callers overlap.
    pub(crate) fn with_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: self.outcome.clone(),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_json(&self, _url: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

/// Listing body in the shape the assets endpoint returns.
pub(crate) fn assets_body() -> Value {
    json!({
        "data": [
            {
                "id": "bitcoin",
                "rank": "1",
                "symbol": "BTC",
                "name": "Bitcoin",
                "supply": "19500000.0000000000000000",
                "maxSupply": "21000000.0000000000000000",
                "marketCapUsd": "1170000000000.00",
                "volumeUsd24Hr": "9500000000.00",
                "priceUsd": "60000.50",
                "changePercent24Hr": "1.25",
                "vwap24Hr": "59850.10",
                "explorer": "https://blockchain.info/"
            },
            {
                "id": "ethereum",
                "rank": "2",
                "symbol": "ETH",
                "name": "Ethereum",
                "supply": "120000000.0000000000000000",
                "maxSupply": null,
                "marketCapUsd": "360000000000.00",
                "volumeUsd24Hr": "4200000000.00",
                "priceUsd": "3000.25",
                "changePercent24Hr": "-2.40",
                "vwap24Hr": null,
                "explorer": "https://etherscan.io/"
            }
        ],
        "timestamp": 1718000000000u64
    })
}
