// Domain types and value objects
mod asset;
mod wallet;

pub use asset::Asset;
pub use wallet::{Wallet, WalletEntry, WalletError, parse_quantity};
