mod phases;
mod root;
mod state;

pub(crate) use state::{AppState, FailedState, LoadingState, ReadyState};

pub(crate) use phases::PhaseView;

pub use root::{App, build_query_client};
