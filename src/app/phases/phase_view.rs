use eframe::egui::Context;

use crate::app::App;
use crate::app::state::AppState;

/// One frame of a phase: draw it, then say which phase the next frame is in.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
