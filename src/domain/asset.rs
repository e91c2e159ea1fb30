use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

/// A tradable asset as listed by the market-data API.
///
/// Numeric fields arrive as decimal strings and are kept verbatim; the helpers below
/// parse the ones the UI needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub rank: String,
    pub symbol: String,
    pub name: String,
    pub supply: String,
    pub max_supply: Option<String>,
    pub market_cap_usd: String,
    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24h: String,
    pub price_usd: String,
    #[serde(rename = "changePercent24Hr")]
    pub change_percent_24h: String,
    #[serde(rename = "vwap24Hr")]
    pub vwap_24h: Option<String>,
    pub explorer: String,
}

impl Asset {
    pub fn price(&self) -> Option<Decimal> {
        Decimal::from_str(self.price_usd.trim()).ok()
    }

    pub fn change_24h(&self) -> Option<f64> {
        self.change_percent_24h.trim().parse().ok()
    }

    pub fn rank(&self) -> Option<u32> {
        self.rank.trim().parse().ok()
    }

    /// Id and name only; every market field is empty.
    #[cfg(test)]
    pub(crate) fn stub(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            rank: String::new(),
            symbol: String::new(),
            name: name.to_string(),
            supply: String::new(),
            max_supply: None,
            market_cap_usd: String::new(),
            volume_usd_24h: String::new(),
            price_usd: String::new(),
            change_percent_24h: String::new(),
            vwap_24h: None,
            explorer: String::new(),
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::Asset;
    use crate::data::test_support::assets_body;

    fn listing() -> Vec<Asset> {
        serde_json::from_value(assets_body()["data"].clone()).unwrap()
    }

    #[test]
    fn decodes_wire_field_names() {
        let assets = listing();
        let btc = &assets[0];
        assert_eq!(btc.id, "bitcoin");
        assert_eq!(btc.volume_usd_24h, "9500000000.00");
        assert_eq!(btc.change_percent_24h, "1.25");
        assert_eq!(btc.vwap_24h.as_deref(), Some("59850.10"));
        assert_eq!(btc.max_supply.as_deref(), Some("21000000.0000000000000000"));
    }

    #[test]
    fn nullable_fields_decode_as_none() {
        let eth = &listing()[1];
        assert!(eth.max_supply.is_none());
        assert!(eth.vwap_24h.is_none());
    }

    #[test]
    fn parses_numeric_strings() {
        let assets = listing();
        assert_eq!(assets[0].price(), Some(dec!(60000.50)));
        assert_eq!(assets[1].change_24h(), Some(-2.40));
        assert_eq!(assets[1].rank(), Some(2));
        assert_eq!(assets[0].to_string(), "Bitcoin (BTC)");
    }

    #[test]
    fn unparsable_numbers_yield_none() {
        let stub = Asset::stub("bitcoin", "Bitcoin");
        assert!(stub.price().is_none());
        assert!(stub.change_24h().is_none());
        assert!(stub.rank().is_none());
    }
}
