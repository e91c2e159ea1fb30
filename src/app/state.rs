// src/app/state.rs

use crate::data::FetchError;

#[derive(Clone, Default)]
pub(crate) struct LoadingState;

#[derive(Clone)]
pub(crate) struct ReadyState;

#[derive(Clone)]
pub(crate) struct FailedState {
    pub(crate) error: FetchError,
}

pub(crate) enum AppState {
    Loading(LoadingState),
    Ready(ReadyState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

impl AppState {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            AppState::Loading(_) => "loading",
            AppState::Ready(_) => "ready",
            AppState::Failed(_) => "failed",
        }
    }
}
