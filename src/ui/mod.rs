mod marketplace;
mod screens;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;

pub use marketplace::{Marketplace, WalletRow};

pub(crate) use screens::{render_failed, render_loading};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::setup_custom_visuals;
