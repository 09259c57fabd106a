// src/app/state.rs

/// Nothing has loaded successfully yet.
#[derive(Default, Clone)]
pub(crate) struct AwaitingFileState;

/// A report is loaded; the chart (or the last render error) is on screen.
#[derive(Default, Clone)]
pub(crate) struct ShowingState;

pub(crate) enum AppState {
    AwaitingFile(AwaitingFileState),
    Showing(ShowingState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::AwaitingFile(AwaitingFileState)
    }
}
