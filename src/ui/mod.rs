pub mod graphs;
pub mod toolbar;

use crate::ruleset::Variant;
use crate::simulation::SimState;
use crate::stats::SimStats;

/// Panel visibility plus requests the toolbar records for the main loop to
/// apply between frames (switching rulesets rebuilds the world).
#[derive(Default)]
pub struct UiState {
    pub show_graphs: bool,
    pub step_requested: bool,
    pub reset_requested: bool,
    pub variant_request: Option<Variant>,
}

/// Draw all egui panels on top of the rendered frame.
pub fn draw_ui(sim: &mut SimState, ui_state: &mut UiState, stats: &SimStats) {
    egui_macroquad::ui(|ctx| {
        toolbar::draw_toolbar(ctx, sim, ui_state);

        if ui_state.show_graphs {
            graphs::draw_graphs(ctx, stats);
        }
    });

    egui_macroquad::draw();
}
