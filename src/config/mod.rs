//! Configuration module for the asset wallet.

// Can all be private because we have a public re-export.
mod coincap;
mod debug;

pub use coincap::{COINCAP, CoinCapConfig, QueryCacheConfig};
pub use debug::DF;
