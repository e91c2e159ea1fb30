use {
    crate::{
        data::FetchError,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_loading(ctx: &Context, url: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(UI_TEXT.ls_title.as_str())
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.warning),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.ls_fetching, url))
                    .italics()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(20.0);
            ui.spinner();
        });
    });
}

/// Error screen for a failed asset fetch. Returns true when Retry was clicked.
pub(crate) fn render_failed(ctx: &Context, error: &FetchError) -> bool {
    let mut retry = false;
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(UI_TEXT.fs_title.as_str())
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.loss),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(error.to_string()).color(UI_CONFIG.colors.label));
            ui.add_space(20.0);
            retry = ui.button(UI_TEXT.fs_retry.as_str()).clicked();
        });
    });
    retry
}
