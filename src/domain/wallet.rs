// src/domain/wallet.rs

use std::str::FromStr;

use rust_decimal::Decimal;

/// A held quantity of one asset. Quantity is always > 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub asset_id: String,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("select an asset first")]
    NoAssetSelected,

    #[error("unknown asset `{0}`")]
    UnknownAsset(String),

    #[error("`{0}` is not a valid quantity")]
    InvalidQuantity(String),

    #[error("quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("`{0}` is not in the wallet")]
    NotHeld(String),

    #[error("cannot remove {requested} `{asset_id}`, only {held} held")]
    InsufficientQuantity {
        asset_id: String,
        held: Decimal,
        requested: Decimal,
    },

    #[error("holding of `{0}` would exceed the largest representable quantity")]
    QuantityOverflow(String),
}

/// Parse a user-typed quantity. Must be a positive decimal.
pub fn parse_quantity(input: &str) -> Result<Decimal, WalletError> {
    let trimmed = input.trim();
    let quantity = Decimal::from_str(trimmed)
        .map_err(|_| WalletError::InvalidQuantity(trimmed.to_string()))?;
    if quantity <= Decimal::ZERO {
        return Err(WalletError::NonPositiveQuantity);
    }
    Ok(quantity)
}

/// Local holdings, one entry per asset, in the order assets were first added.
#[derive(Debug, Clone, Default)]
pub struct Wallet {
    entries: Vec<WalletEntry>,
}

impl Wallet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `quantity` of `asset_id`, merging into an existing entry.
    /// Returns the quantity now held. An add that would overflow changes nothing.
    pub fn add(&mut self, asset_id: &str, quantity: Decimal) -> Result<Decimal, WalletError> {
        if quantity <= Decimal::ZERO {
            return Err(WalletError::NonPositiveQuantity);
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.asset_id == asset_id) {
            entry.quantity = entry
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| WalletError::QuantityOverflow(asset_id.to_string()))?;
            return Ok(entry.quantity);
        }
        self.entries.push(WalletEntry {
            asset_id: asset_id.to_string(),
            quantity,
        });
        Ok(quantity)
    }

    /// Remove `quantity` of `asset_id`. Removing exactly what is held deletes the entry;
    /// removing more is rejected and leaves the wallet untouched.
    /// Returns the quantity still held.
    pub fn remove(&mut self, asset_id: &str, quantity: Decimal) -> Result<Decimal, WalletError> {
        if quantity <= Decimal::ZERO {
            return Err(WalletError::NonPositiveQuantity);
        }
        let idx = self
            .entries
            .iter()
            .position(|e| e.asset_id == asset_id)
            .ok_or_else(|| WalletError::NotHeld(asset_id.to_string()))?;

        let held = self.entries[idx].quantity;
        if quantity > held {
            return Err(WalletError::InsufficientQuantity {
                asset_id: asset_id.to_string(),
                held,
                requested: quantity,
            });
        }

        let remaining = held - quantity;
        if remaining.is_zero() {
            self.entries.remove(idx);
        } else {
            self.entries[idx].quantity = remaining;
        }
        Ok(remaining)
    }

    pub fn quantity_of(&self, asset_id: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.asset_id == asset_id)
            .map(|e| e.quantity)
    }

    pub fn entries(&self) -> &[WalletEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::{Wallet, WalletError, parse_quantity};

    #[test]
    fn adding_the_same_asset_merges_quantities() {
        let mut wallet = Wallet::new();
        assert_eq!(wallet.add("bitcoin", dec!(1)), Ok(dec!(1)));
        assert_eq!(wallet.add("bitcoin", dec!(0.5)), Ok(dec!(1.5)));
        assert_eq!(wallet.len(), 1);
        assert_eq!(wallet.quantity_of("bitcoin"), Some(dec!(1.5)));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut wallet = Wallet::new();
        wallet.add("ethereum", dec!(2)).unwrap();
        wallet.add("bitcoin", dec!(1)).unwrap();
        wallet.add("ethereum", dec!(1)).unwrap();

        let ids: Vec<_> = wallet.entries().iter().map(|e| e.asset_id.as_str()).collect();
        assert_eq!(ids, ["ethereum", "bitcoin"]);
    }

    #[test]
    fn rejects_non_positive_quantities() {
        let mut wallet = Wallet::new();
        assert_eq!(wallet.add("bitcoin", dec!(0)), Err(WalletError::NonPositiveQuantity));
        assert_eq!(wallet.add("bitcoin", dec!(-1)), Err(WalletError::NonPositiveQuantity));
        assert!(wallet.is_empty());

        wallet.add("bitcoin", dec!(1)).unwrap();
        assert_eq!(wallet.remove("bitcoin", dec!(0)), Err(WalletError::NonPositiveQuantity));
        assert_eq!(wallet.quantity_of("bitcoin"), Some(dec!(1)));
    }

    #[test]
    fn partial_remove_keeps_the_remainder() {
        let mut wallet = Wallet::new();
        wallet.add("bitcoin", dec!(3)).unwrap();
        assert_eq!(wallet.remove("bitcoin", dec!(1.25)), Ok(dec!(1.75)));
        assert_eq!(wallet.quantity_of("bitcoin"), Some(dec!(1.75)));
    }

    #[test]
    fn removing_everything_deletes_the_entry() {
        let mut wallet = Wallet::new();
        wallet.add("bitcoin", dec!(1)).unwrap();
        assert_eq!(wallet.remove("bitcoin", dec!(1.0)), Ok(dec!(0)));
        assert!(wallet.is_empty());
        assert_eq!(wallet.quantity_of("bitcoin"), None);
    }

    #[test]
    fn over_removal_is_rejected_and_changes_nothing() {
        let mut wallet = Wallet::new();
        wallet.add("bitcoin", dec!(1)).unwrap();

        let err = wallet.remove("bitcoin", dec!(2)).unwrap_err();
        assert_eq!(
            err,
            WalletError::InsufficientQuantity {
                asset_id: "bitcoin".to_string(),
                held: dec!(1),
                requested: dec!(2),
            }
        );
        assert_eq!(wallet.quantity_of("bitcoin"), Some(dec!(1)));
    }

    #[test]
    fn merging_past_the_decimal_range_is_rejected() {
        let mut wallet = Wallet::new();
        wallet.add("bitcoin", Decimal::MAX).unwrap();

        assert_eq!(
            wallet.add("bitcoin", Decimal::MAX),
            Err(WalletError::QuantityOverflow("bitcoin".to_string()))
        );
        assert_eq!(wallet.quantity_of("bitcoin"), Some(Decimal::MAX));
        assert_eq!(wallet.len(), 1);
    }

    #[test]
    fn removing_an_unheld_asset_is_rejected() {
        let mut wallet = Wallet::new();
        assert_eq!(
            wallet.remove("dogecoin", dec!(1)),
            Err(WalletError::NotHeld("dogecoin".to_string()))
        );
    }

    #[test]
    fn parses_user_quantities() {
        assert_eq!(parse_quantity(" 1.5 "), Ok(dec!(1.5)));
        assert_eq!(parse_quantity("0"), Err(WalletError::NonPositiveQuantity));
        assert_eq!(parse_quantity("-3"), Err(WalletError::NonPositiveQuantity));
        assert_eq!(
            parse_quantity("abc"),
            Err(WalletError::InvalidQuantity("abc".to_string()))
        );
        assert_eq!(parse_quantity(""), Err(WalletError::InvalidQuantity(String::new())));
    }
}
