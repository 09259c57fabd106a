pub(super) mod awaiting_file;
pub(super) mod phase_view;
pub(super) mod showing;

pub(crate) use phase_view::PhaseView;
