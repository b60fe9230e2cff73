use macroquad::prelude::*;

use crate::ant::AntArena;
use crate::ruleset::Ruleset;
use crate::simulation::{SimState, Target};
use crate::terrain;
use crate::viewport::Viewport;

const LETTERBOX_COLOR: Color = Color::new(0.12, 0.12, 0.13, 1.0);
const CANVAS_COLOR: Color = Color::new(0.97, 0.97, 0.95, 1.0);
const PATH_THICKNESS: f32 = 2.0;

/// Draw one frame: canvas backdrop, terrain, ants with trails, target,
/// border, then the screen-space HUD.
pub fn draw(sim: &SimState, viewport: &Viewport) {
    clear_background(LETTERBOX_COLOR);
    set_camera(&viewport.to_macroquad_camera());

    draw_rectangle(
        0.0,
        0.0,
        sim.ruleset.canvas_width,
        sim.ruleset.canvas_height,
        CANVAS_COLOR,
    );

    terrain::draw_terrain(&sim.terrain, sim.ruleset.tile_color);
    draw_ants(&sim.arena, &sim.ruleset);
    draw_target(&sim.target, sim.ruleset.target_color);

    draw_rectangle_lines(
        0.0,
        0.0,
        sim.ruleset.canvas_width,
        sim.ruleset.canvas_height,
        2.0,
        BLACK,
    );

    set_default_camera();
    draw_hud(sim);
}

fn draw_ants(arena: &AntArena, ruleset: &Ruleset) {
    for (_idx, ant) in arena.iter_live() {
        draw_circle(ant.pos.x, ant.pos.y, ant.size, ant.color);

        // Trail: polyline from the ant through its recent positions.
        let mut prev = ant.pos;
        for point in ant.path.iter().rev() {
            draw_line(
                prev.x,
                prev.y,
                point.x,
                point.y,
                PATH_THICKNESS,
                ruleset.path_color,
            );
            prev = *point;
        }
    }
}

/// Diamond marker.
fn draw_target(target: &Target, color: Color) {
    let Target { pos, radius } = *target;
    let top = vec2(pos.x, pos.y - radius);
    let right = vec2(pos.x + radius, pos.y);
    let bottom = vec2(pos.x, pos.y + radius);
    let left = vec2(pos.x - radius, pos.y);
    draw_triangle(top, right, bottom, color);
    draw_triangle(top, bottom, left, color);
}

fn draw_hud(sim: &SimState) {
    let tc = Color::new(0.85, 0.87, 0.9, 1.0);
    let sh = Color::new(0.0, 0.0, 0.0, 0.5);

    let lines = [
        format!("FPS: {}", get_fps()),
        format!("Total Ants: {}", sim.arena.count),
        format!("Exited Ants: {}", sim.exited_total),
        format!("Tiles: {}", sim.terrain.live_count()),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = 20.0 + i as f32 * 20.0;
        draw_text(line, 11.0, y + 1.0, 18.0, sh);
        draw_text(line, 10.0, y, 18.0, tc);
    }

    if sim.paused {
        let pause_text = "PAUSED (Space to resume)";
        let tw = measure_text(pause_text, None, 24, 1.0).width;
        let x = screen_width() * 0.5 - tw * 0.5;
        draw_text(pause_text, x + 1.0, 31.0, 24.0, sh);
        draw_text(pause_text, x, 30.0, 24.0, Color::new(1.0, 0.8, 0.2, 0.9));
    }
}
