use std::collections::HashMap;

use eframe::egui::{ComboBox, Grid, RichText, ScrollArea, TextEdit, Ui};
use rust_decimal::Decimal;

use crate::config::DF;
use crate::domain::{Asset, Wallet, WalletError, parse_quantity};
use crate::ui::utils::{change_color, colored_subsection_heading, format_change, format_usd};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// One rendered line of the wallet list. `value_usd` is `None` when the asset is
/// unlisted, has no parsable price, or the value leaves the decimal range.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletRow {
    pub asset_id: String,
    pub name: String,
    pub quantity: Decimal,
    pub value_usd: Option<Decimal>,
}

/// Asset listing plus the add/remove forms for the local wallet.
///
/// Inputs are kept as the raw text the user typed and only parsed when an action fires.
/// A rejected action leaves the wallet untouched and is kept in `last_error` for display.
#[derive(Debug, Default)]
pub struct Marketplace {
    assets: Vec<Asset>,
    selected_asset: Option<String>,
    add_quantity: String,
    // Per-row removal input, keyed by asset id
    remove_quantities: HashMap<String, String>,
    wallet: Wallet,
    last_error: Option<WalletError>,
}

impl Marketplace {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            ..Default::default()
        }
    }

    /// Swap in a fresh listing. Holdings survive; a selection that vanished is dropped.
    pub fn set_assets(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
        if let Some(id) = &self.selected_asset {
            if self.find_asset(id).is_none() {
                self.selected_asset = None;
            }
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn select_asset(&mut self, asset_id: &str) {
        self.selected_asset = Some(asset_id.to_string());
    }

    pub fn selected_asset(&self) -> Option<&str> {
        self.selected_asset.as_deref()
    }

    pub fn set_add_quantity(&mut self, input: impl Into<String>) {
        self.add_quantity = input.into();
    }

    pub fn set_remove_quantity(&mut self, asset_id: &str, input: impl Into<String>) {
        self.remove_quantities
            .insert(asset_id.to_string(), input.into());
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn last_error(&self) -> Option<&WalletError> {
        self.last_error.as_ref()
    }

    /// Add the typed quantity of the selected asset. Returns the quantity now held.
    pub fn add(&mut self) -> Result<Decimal, WalletError> {
        let result = self.try_add();
        match &result {
            Ok(held) => {
                if DF.log_wallet {
                    log::info!("Wallet add ok, now holding {}", held);
                }
                self.add_quantity.clear();
                self.last_error = None;
            }
            Err(err) => {
                if DF.log_wallet {
                    log::info!("Wallet add rejected: {}", err);
                }
                self.last_error = Some(err.clone());
            }
        }
        result
    }

    fn try_add(&mut self) -> Result<Decimal, WalletError> {
        let asset_id = self
            .selected_asset
            .clone()
            .ok_or(WalletError::NoAssetSelected)?;
        if self.find_asset(&asset_id).is_none() {
            return Err(WalletError::UnknownAsset(asset_id));
        }
        let quantity = parse_quantity(&self.add_quantity)?;
        self.wallet.add(&asset_id, quantity)
    }

    /// Remove the quantity typed on `asset_id`'s row. Returns the quantity still held.
    pub fn remove(&mut self, asset_id: &str) -> Result<Decimal, WalletError> {
        let input = self
            .remove_quantities
            .get(asset_id)
            .map(String::as_str)
            .unwrap_or("");
        let result = parse_quantity(input).and_then(|q| self.wallet.remove(asset_id, q));
        match &result {
            Ok(remaining) => {
                if DF.log_wallet {
                    log::info!("Wallet remove ok, {} {} left", remaining, asset_id);
                }
                self.remove_quantities.remove(asset_id);
                self.last_error = None;
            }
            Err(err) => {
                if DF.log_wallet {
                    log::info!("Wallet remove rejected: {}", err);
                }
                self.last_error = Some(err.clone());
            }
        }
        result
    }

    pub fn wallet_rows(&self) -> Vec<WalletRow> {
        self.wallet
            .entries()
            .iter()
            .map(|entry| {
                let asset = self.find_asset(&entry.asset_id);
                WalletRow {
                    asset_id: entry.asset_id.clone(),
                    name: asset
                        .map(|a| a.name.clone())
                        .unwrap_or_else(|| entry.asset_id.clone()),
                    quantity: entry.quantity,
                    value_usd: asset
                        .and_then(Asset::price)
                        .and_then(|p| p.checked_mul(entry.quantity)),
                }
            })
            .collect()
    }

    /// Sum of the rows whose value is known. `None` when the sum leaves the decimal range.
    pub fn total_value_usd(&self) -> Option<Decimal> {
        self.wallet_rows()
            .iter()
            .filter_map(|r| r.value_usd)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
    }

    /// Text of the wallet list as rendered, one `name quantity` line per holding.
    pub fn wallet_text(&self) -> String {
        self.wallet_rows()
            .iter()
            .map(|r| format!("{} {}", r.name, r.quantity.normalize()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find_asset(&self, asset_id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == asset_id)
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading(
            RichText::new(UI_TEXT.mp_title.as_str())
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);

        self.render_market_table(ui);
        ui.separator();

        self.render_add_form(ui);
        if let Some(err) = &self.last_error {
            ui.label(RichText::new(err.to_string()).color(UI_CONFIG.colors.loss));
        }
        ui.separator();

        self.render_wallet_section(ui);
    }

    fn render_market_table(&self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.mp_market_heading.as_str()));
        ScrollArea::vertical()
            .id_salt("market_table")
            .max_height(UI_CONFIG.sizes.market_table_height)
            .show(ui, |ui| {
                Grid::new("market_grid")
                    .striped(true)
                    .num_columns(4)
                    .show(ui, |ui| {
                        ui.label(RichText::new(UI_TEXT.mp_header_rank.as_str()).strong());
                        ui.label(RichText::new(UI_TEXT.mp_header_name.as_str()).strong());
                        ui.label(RichText::new(UI_TEXT.mp_header_price.as_str()).strong());
                        ui.label(RichText::new(UI_TEXT.mp_header_change.as_str()).strong());
                        ui.end_row();

                        for asset in &self.assets {
                            ui.label(asset.rank.as_str());
                            ui.label(asset.to_string());
                            ui.label(
                                asset
                                    .price()
                                    .map(format_usd)
                                    .unwrap_or_else(|| "-".to_string()),
                            );
                            match asset.change_24h() {
                                Some(change) => ui.label(
                                    RichText::new(format_change(change)).color(change_color(change)),
                                ),
                                None => ui.label("-"),
                            };
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_add_form(&mut self, ui: &mut Ui) {
        let mut add_clicked = false;
        let Self {
            assets,
            selected_asset,
            add_quantity,
            ..
        } = &mut *self;

        ui.horizontal(|ui| {
            let selected_text = selected_asset
                .as_deref()
                .and_then(|id| assets.iter().find(|a| a.id == id))
                .map(|a| a.name.clone())
                .unwrap_or_else(|| UI_TEXT.mp_select_placeholder.clone());

            ComboBox::from_id_salt("asset_select")
                .width(UI_CONFIG.sizes.select_width)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for asset in assets.iter() {
                        ui.selectable_value(selected_asset, Some(asset.id.clone()), asset.to_string());
                    }
                });

            ui.add(
                TextEdit::singleline(add_quantity)
                    .id_salt("add_quantity")
                    .hint_text(UI_TEXT.mp_quantity_hint.as_str())
                    .desired_width(UI_CONFIG.sizes.quantity_width),
            );

            add_clicked = ui.button(UI_TEXT.mp_add_button.as_str()).clicked();
        });

        if add_clicked {
            let _ = self.add();
        }
    }

    fn render_wallet_section(&mut self, ui: &mut Ui) {
        ui.label(colored_subsection_heading(UI_TEXT.wallet_heading.as_str()));

        let rows = self.wallet_rows();
        if rows.is_empty() {
            ui.label(
                RichText::new(UI_TEXT.wallet_empty.as_str())
                    .italics()
                    .color(UI_CONFIG.colors.subdued),
            );
            return;
        }

        let mut remove_clicked: Option<String> = None;
        let remove_quantities = &mut self.remove_quantities;

        Grid::new("wallet_grid")
            .striped(true)
            .num_columns(5)
            .show(ui, |ui| {
                for row in &rows {
                    ui.label(RichText::new(row.name.as_str()).strong());
                    ui.label(row.quantity.normalize().to_string());
                    ui.label(
                        row.value_usd
                            .map(format_usd)
                            .unwrap_or_else(|| "-".to_string()),
                    );

                    let input = remove_quantities.entry(row.asset_id.clone()).or_default();
                    ui.add(
                        TextEdit::singleline(input)
                            .id_salt(("remove_quantity", row.asset_id.as_str()))
                            .hint_text(UI_TEXT.mp_quantity_hint.as_str())
                            .desired_width(UI_CONFIG.sizes.quantity_width),
                    );

                    if ui.button(UI_TEXT.wallet_remove_button.as_str()).clicked() {
                        remove_clicked = Some(row.asset_id.clone());
                    }
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        ui.label(
            RichText::new(format!(
                "{}: {}",
                UI_TEXT.wallet_total,
                self.total_value_usd()
                    .map(format_usd)
                    .unwrap_or_else(|| "-".to_string())
            ))
            .strong(),
        );

        if let Some(asset_id) = remove_clicked {
            let _ = self.remove(&asset_id);
        }
    }
}
