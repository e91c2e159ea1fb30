pub(super) mod phase_view;
pub(super) mod loading;
pub(super) mod ready;
pub(super) mod failed;

pub(crate) use phase_view::PhaseView;
