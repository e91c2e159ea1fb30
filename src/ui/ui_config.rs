use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub gain: Color32,
    pub loss: Color32,
    pub warning: Color32,
    pub subdued: Color32,
}

/// Widget sizes shared by the marketplace forms.
#[derive(Clone, Copy, Default)]
pub struct UiSizes {
    pub quantity_width: f32,
    pub select_width: f32,
    pub market_table_height: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sizes: UiSizes,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 20, 28),
        side_panel: Color32::from_rgb(25, 25, 25),
        gain: Color32::from_rgb(80, 200, 120),
        loss: Color32::from_rgb(230, 80, 80),
        warning: Color32::from_rgb(255, 165, 0),
        subdued: Color32::DARK_GRAY,
    },
    sizes: UiSizes {
        quantity_width: 80.0,
        select_width: 220.0,
        market_table_height: 260.0,
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
