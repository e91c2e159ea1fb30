use std::sync::LazyLock;

pub const ICON_REFRESH: &str = "\u{21bb}";
pub const ICON_WARNING: &str = "\u{26a0}";
pub const ICON_WALLET: &str = "\u{1f45b}";

pub struct UiText {
    pub app_title: String,

    // --- Marketplace ---
    pub mp_title: String,
    pub mp_market_heading: String,
    pub mp_select_placeholder: String,
    pub mp_quantity_hint: String,
    pub mp_add_button: String,
    pub mp_header_rank: String,
    pub mp_header_name: String,
    pub mp_header_price: String,
    pub mp_header_change: String,

    // --- Wallet section ---
    pub wallet_heading: String,
    pub wallet_empty: String,
    pub wallet_remove_button: String,
    pub wallet_total: String,

    // --- Loading / failure screens ---
    pub ls_title: String,
    pub ls_fetching: String,
    pub fs_title: String,
    pub fs_retry: String,

    // --- Top bar ---
    pub tb_refresh: String,
    pub tb_updated: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Asset Wallet".to_string(),

    mp_title: "Marketplace".to_string(),
    mp_market_heading: "Assets".to_string(),
    mp_select_placeholder: "Select an asset".to_string(),
    mp_quantity_hint: "Quantity".to_string(),
    mp_add_button: "Add".to_string(),
    mp_header_rank: "#".to_string(),
    mp_header_name: "Name".to_string(),
    mp_header_price: "Price (USD)".to_string(),
    mp_header_change: "24h".to_string(),

    wallet_heading: format!("{} Wallet", ICON_WALLET),
    wallet_empty: "Your wallet is empty.".to_string(),
    wallet_remove_button: "Remove".to_string(),
    wallet_total: "Total".to_string(),

    ls_title: "Loading assets".to_string(),
    ls_fetching: "Fetching".to_string(),
    fs_title: format!("{} Could not load assets", ICON_WARNING),
    fs_retry: "Retry".to_string(),

    tb_refresh: format!("{} Refresh", ICON_REFRESH),
    tb_updated: "Updated".to_string(),
});
