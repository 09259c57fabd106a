mod file_source;
mod phases;
mod root;
mod state;

pub(crate) use file_source::{FileSource, dropped_file_request};
pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, AwaitingFileState, ShowingState};

pub use root::App;
