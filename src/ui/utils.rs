use eframe::egui::{Color32, Context, RichText, Visuals};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ui::ui_config::UI_CONFIG;

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Formats a USD amount with "Trader Precision".
/// - Large (>= 1000): 2 decimals ($95123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Pennies: 5 decimals
/// - Sub-penny: 8 decimals ($0.00000231)
pub fn format_usd(amount: Decimal) -> String {
    if amount.is_zero() {
        return "$0.00".to_string();
    }
    let abs = amount.abs();
    let dp = if abs >= Decimal::ONE_THOUSAND {
        2
    } else if abs >= Decimal::ONE {
        4
    } else if abs >= Decimal::new(1, 2) {
        5
    } else {
        8
    };
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.*}", dp as usize, rounded)
}

/// Signed percentage with two decimals, e.g. `+1.25%`.
pub fn format_change(change: f64) -> String {
    format!("{:+.2}%", change)
}

pub fn change_color(change: f64) -> Color32 {
    if change > 0.0 {
        UI_CONFIG.colors.gain
    } else if change < 0.0 {
        UI_CONFIG.colors.loss
    } else {
        UI_CONFIG.colors.subdued
    }
}
