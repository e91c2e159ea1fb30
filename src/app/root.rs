use {
    chrono::{DateTime, Local},
    eframe::{
        Frame,
        egui::{CentralPanel, Context, ScrollArea},
    },
    std::{mem, sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, FailedState, LoadingState, PhaseView, ReadyState},
    config::{COINCAP, DF, QueryCacheConfig},
    data::{FetchHandle, FetchState, QueryClient, ReqwestTransport, use_fetch_data},
    domain::Asset,
    ui::{Marketplace, UI_CONFIG, render_failed, render_loading, setup_custom_visuals},
};

/// Build the one query client the app shares, from the command line settings.
pub fn build_query_client(args: &Cli) -> QueryClient {
    QueryClient::new(
        Arc::new(ReqwestTransport::new()),
        &QueryCacheConfig {
            max_capacity: COINCAP.cache.max_capacity,
            time_to_live_secs: args.cache_ttl_secs,
        },
    )
}

pub struct App {
    pub(crate) client: QueryClient,
    pub(crate) assets_url: String,
    pub(crate) assets: FetchHandle<Vec<Asset>>,
    pub(crate) marketplace: Marketplace,
    pub(crate) last_updated: Option<DateTime<Local>>,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        let client = build_query_client(&args);
        Self::with_client(client, args.api_url)
    }

    /// Mount the asset fetch against `client`. The request starts immediately.
    pub fn with_client(client: QueryClient, assets_url: impl Into<String>) -> Self {
        let assets_url = assets_url.into();
        let assets = use_fetch_data(client.clone(), assets_url.clone());
        assets.mount();

        Self {
            client,
            assets_url,
            assets,
            marketplace: Marketplace::default(),
            last_updated: None,
            state: AppState::default(),
        }
    }

    pub fn marketplace(&self) -> &Marketplace {
        &self.marketplace
    }

    pub fn marketplace_mut(&mut self) -> &mut Marketplace {
        &mut self.marketplace
    }

    pub fn phase(&self) -> &'static str {
        self.state.name()
    }

    /// Drop cached responses and mount a fresh fetch. Holdings are kept.
    pub fn refresh(&mut self) {
        self.client.clear();
        self.assets = use_fetch_data(self.client.clone(), self.assets_url.clone());
        self.assets.mount();
        self.state = AppState::Loading(LoadingState);
    }

    /// Advance one frame: run the current phase and switch to whatever it returns.
    pub fn tick(&mut self, ctx: &Context) {
        let current = mem::take(&mut self.state);
        let before = current.name();
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Ready(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
        if DF.log_phases && before != self.state.name() {
            log::info!("Phase {} -> {}", before, self.state.name());
        }
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context) -> AppState {
        match self.assets.state() {
            FetchState::Loading => {
                render_loading(ctx, &self.assets_url);
                ctx.request_repaint_after(Duration::from_millis(100));
                AppState::Loading(LoadingState)
            }
            FetchState::Loaded(assets) => {
                if DF.log_fetch {
                    log::info!("Loaded {} assets", assets.len());
                }
                self.marketplace.set_assets(assets);
                self.last_updated = Some(Local::now());
                ctx.request_repaint();
                AppState::Ready(ReadyState)
            }
            FetchState::Failed(error) => {
                ctx.request_repaint();
                AppState::Failed(FailedState { error })
            }
        }
    }

    pub(crate) fn tick_ready_state(&mut self, ctx: &Context) -> AppState {
        let refresh_clicked = self.render_top_panel(ctx);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.marketplace.show(ui));
            });

        if refresh_clicked {
            self.refresh();
            return AppState::Loading(LoadingState);
        }
        AppState::Ready(ReadyState)
    }

    pub(crate) fn tick_failed_state(&mut self, ctx: &Context, state: &mut FailedState) -> AppState {
        if render_failed(ctx, &state.error) {
            self.refresh();
            return AppState::Loading(LoadingState);
        }
        AppState::Failed(state.clone())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick(ctx);
    }
}
