use eframe::egui::{Align, Context, Layout, RichText, TopBottomPanel};

use crate::app::App;
use crate::ui::{UI_CONFIG, UI_TEXT};

impl App {
    /// Title, endpoint and refresh control. Returns true when Refresh was clicked.
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) -> bool {
        let frame = UI_CONFIG.top_panel_frame();
        let mut refresh_clicked = false;

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.app_title.as_str())
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(self.assets_url.as_str())
                            .small()
                            .color(UI_CONFIG.colors.label),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        refresh_clicked = ui.button(UI_TEXT.tb_refresh.as_str()).clicked();
                        if let Some(at) = self.last_updated {
                            ui.label(
                                RichText::new(format!(
                                    "{} {}",
                                    UI_TEXT.tb_updated,
                                    at.format("%H:%M:%S")
                                ))
                                .small()
                                .color(UI_CONFIG.colors.label),
                            );
                        }
                    });
                });
            });

        refresh_clicked
    }
}
