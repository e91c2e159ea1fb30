/// Query cache sizing. Entries expire after `time_to_live_secs`.
pub struct QueryCacheConfig {
    pub max_capacity: u64,
    pub time_to_live_secs: u64,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: COINCAP.cache.max_capacity,
            time_to_live_secs: COINCAP.cache.time_to_live_secs,
        }
    }
}

pub struct CacheDefaults {
    pub max_capacity: u64,
    pub time_to_live_secs: u64,
}

pub struct CoinCapConfig {
    /// Asset listing endpoint. Body is `{ "data": [Asset, ...], "timestamp": ... }`.
    pub assets_url: &'static str,
    pub cache: CacheDefaults,
}

pub const COINCAP: CoinCapConfig = CoinCapConfig {
    assets_url: "https://api.coincap.io/v2/assets",
    cache: CacheDefaults {
        max_capacity: 32,
        time_to_live_secs: 60,
    },
};
