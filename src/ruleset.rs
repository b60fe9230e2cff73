use macroquad::prelude::*;

/// The three walk rulesets the toy ships with. They share one engine and
/// differ only in parameters and which rules are switched on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    /// Big canvas, ten ants per click, speed slider, arrow-key nudges.
    /// Terrain is scenery only and ants never change size or color.
    Swarm,
    /// Ants eat terrain, grow when blocked, and seed new tiles where they
    /// collide. Growth is capped.
    Gluttony,
    /// The polished cut: edible terrain, palette recoloring, unbounded
    /// growth, no tile seeding.
    Gallery,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Swarm, Variant::Gluttony, Variant::Gallery];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Swarm => "Swarm",
            Variant::Gluttony => "Gluttony",
            Variant::Gallery => "Gallery",
        }
    }
}

/// How an ant picks a new color after eating a tile or hitting another ant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Recolor {
    Never,
    RandomRgb,
    Palette,
}

/// Every per-variant parameter in one place.
#[derive(Clone, Debug)]
pub struct Ruleset {
    pub variant: Variant,
    pub name: &'static str,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub grid_size: f32,
    pub path_len: usize,
    pub spawn_per_click: usize,
    pub start_size: f32,
    pub start_speed: f32,
    /// Per-axis step is speed * step_scale.
    pub step_scale: f32,
    /// Reject moves that leave the canvas.
    pub bounds_checked: bool,
    pub tiles_edible: bool,
    /// Grow when a move is rejected.
    pub wall_penalty: bool,
    pub max_size: Option<f32>,
    pub ant_collisions: bool,
    pub grow_on_ant_collision: bool,
    pub spawn_tile_on_collision: bool,
    pub speed_slider: bool,
    pub arrow_keys: bool,
    pub recolor: Recolor,
    pub tile_color: Color,
    pub path_color: Color,
    pub target_radius: f32,
    pub target_color: Color,
}

impl Ruleset {
    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::Swarm => Self {
                variant,
                name: variant.label(),
                canvas_width: 1440.0,
                canvas_height: 700.0,
                grid_size: 35.0,
                path_len: 6,
                spawn_per_click: 10,
                start_size: 5.0,
                start_speed: 1.0,
                step_scale: 5.0,
                bounds_checked: true,
                tiles_edible: false,
                wall_penalty: false,
                max_size: None,
                ant_collisions: false,
                grow_on_ant_collision: false,
                spawn_tile_on_collision: false,
                speed_slider: true,
                arrow_keys: true,
                recolor: Recolor::Never,
                tile_color: GREEN,
                path_color: BLACK,
                target_radius: 25.0,
                target_color: RED,
            },
            Variant::Gluttony => Self {
                variant,
                name: variant.label(),
                canvas_width: 1200.0,
                canvas_height: 1000.0,
                grid_size: 40.0,
                path_len: 50,
                spawn_per_click: 1,
                start_size: 3.0,
                start_speed: 1.0,
                step_scale: 1.0,
                bounds_checked: false,
                tiles_edible: true,
                wall_penalty: true,
                max_size: Some(60.0),
                ant_collisions: true,
                grow_on_ant_collision: false,
                spawn_tile_on_collision: true,
                speed_slider: false,
                arrow_keys: false,
                recolor: Recolor::RandomRgb,
                tile_color: GREEN,
                path_color: Color::new(0.5, 0.5, 0.5, 0.3),
                target_radius: 15.0,
                target_color: YELLOW,
            },
            Variant::Gallery => Self {
                variant,
                name: variant.label(),
                canvas_width: 800.0,
                canvas_height: 800.0,
                grid_size: 20.0,
                path_len: 10,
                spawn_per_click: 1,
                start_size: 5.0,
                start_speed: 1.0,
                step_scale: 1.0,
                bounds_checked: false,
                tiles_edible: true,
                wall_penalty: false,
                max_size: None,
                ant_collisions: true,
                grow_on_ant_collision: true,
                spawn_tile_on_collision: false,
                speed_slider: false,
                arrow_keys: false,
                recolor: Recolor::Palette,
                tile_color: BLACK,
                path_color: Color::new(0.5, 0.5, 0.5, 0.3),
                target_radius: 15.0,
                target_color: YELLOW,
            },
        }
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.canvas_width && pos.y >= 0.0 && pos.y <= self.canvas_height
    }

    /// Apply the variant's size cap, if any.
    pub fn clamp_size(&self, size: f32) -> f32 {
        match self.max_size {
            Some(max) => size.min(max),
            None => size,
        }
    }
}
