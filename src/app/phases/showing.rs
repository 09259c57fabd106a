use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::ShowingState};

impl PhaseView for ShowingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_showing_state(ctx)
    }
}
