use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::AwaitingFileState};

impl PhaseView for AwaitingFileState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_awaiting_state(ctx)
    }
}
