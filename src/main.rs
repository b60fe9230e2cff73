use macroquad::prelude::*;

mod ant;
mod collision;
mod config;
mod movement;
mod renderer;
mod ruleset;
mod simulation;
mod stats;
mod terrain;
mod ui;
mod viewport;

use ruleset::Variant;
use simulation::SimState;
use stats::SimStats;
use ui::UiState;
use viewport::Viewport;

fn window_conf() -> Conf {
    Conf {
        window_title: "ANTWALK — grid random walk toy".to_string(),
        window_width: 1280,
        window_height: 840,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut world_seed: u64 = 42;
    let mut sim = SimState::new(Variant::Gallery, world_seed);
    let mut sim_stats = SimStats::new(config::STATS_CAPACITY);
    let mut ui_state = UiState::default();
    let mut accumulator = 0.0f64;

    loop {
        // Apply UI requests recorded last frame before anything touches sim.
        if let Some(variant) = ui_state.variant_request.take() {
            world_seed = world_seed.wrapping_add(1);
            sim = SimState::new(variant, world_seed);
            sim_stats = SimStats::new(config::STATS_CAPACITY);
            eprintln!("[ANTWALK] switched ruleset to {}", sim.ruleset.name);
        }
        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            world_seed = world_seed.wrapping_add(1);
            sim = SimState::new(sim.ruleset.variant, world_seed);
            sim_stats = SimStats::new(config::STATS_CAPACITY);
            eprintln!("[ANTWALK] reset world ({})", sim.ruleset.name);
        }
        if ui_state.step_requested {
            ui_state.step_requested = false;
            if sim.paused {
                sim.tick();
                record_stats(&sim, &mut sim_stats);
            }
        }

        let frame_time = get_frame_time() as f64;
        accumulator += frame_time.min(0.1);

        let viewport = Viewport::fit(
            screen_width(),
            screen_height(),
            sim.ruleset.canvas_width,
            sim.ruleset.canvas_height,
        );

        // Click spawning (only if egui doesn't want the input).
        let mut egui_wants_pointer = false;
        egui_macroquad::cfg(|ctx| {
            egui_wants_pointer = ctx.wants_pointer_input();
        });
        if !egui_wants_pointer && is_mouse_button_pressed(MouseButton::Left) {
            let canvas_pos = viewport.screen_to_canvas(Vec2::from(mouse_position()));
            sim.spawn_ants_at(canvas_pos);
        }

        if is_key_pressed(KeyCode::Space) {
            sim.paused = !sim.paused;
        }
        if is_key_pressed(KeyCode::R) {
            ui_state.reset_requested = true;
        }
        if is_key_pressed(KeyCode::Key1) {
            ui_state.variant_request = Some(Variant::Swarm);
        }
        if is_key_pressed(KeyCode::Key2) {
            ui_state.variant_request = Some(Variant::Gluttony);
        }
        if is_key_pressed(KeyCode::Key3) {
            ui_state.variant_request = Some(Variant::Gallery);
        }

        // Arrow keys push the whole swarm while held.
        for (key, dir) in [
            (KeyCode::Up, vec2(0.0, -1.0)),
            (KeyCode::Down, vec2(0.0, 1.0)),
            (KeyCode::Left, vec2(-1.0, 0.0)),
            (KeyCode::Right, vec2(1.0, 0.0)),
        ] {
            if is_key_down(key) {
                sim.nudge(dir);
            }
        }

        let dt = config::FIXED_DT as f64;
        if !sim.paused {
            while accumulator >= dt {
                sim.tick();
                record_stats(&sim, &mut sim_stats);
                accumulator -= dt;
            }
        } else {
            accumulator = 0.0;
        }

        renderer::draw(&sim, &viewport);
        ui::draw_ui(&mut sim, &mut ui_state, &sim_stats);

        next_frame().await;
    }
}

fn record_stats(sim: &SimState, sim_stats: &mut SimStats) {
    sim_stats.record(sim.arena.count, sim.terrain.live_count(), sim.exited_total);
}
