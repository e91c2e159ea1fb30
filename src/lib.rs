#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod shared;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, build_query_client};
pub use config::COINCAP;
pub use data::{FetchError, FetchHandle, FetchState, QueryClient, use_fetch_data};
pub use domain::{Asset, Wallet, WalletEntry, WalletError};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Asset listing endpoint
    #[arg(long, default_value = COINCAP.assets_url)]
    pub api_url: String,

    /// Seconds a cached response stays fresh
    #[arg(long, default_value_t = COINCAP.cache.time_to_live_secs)]
    pub cache_ttl_secs: u64,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            api_url: COINCAP.assets_url.to_string(),
            cache_ttl_secs: COINCAP.cache.time_to_live_secs,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
