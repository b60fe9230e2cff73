// All tunable constants shared by every ruleset. Per-variant parameters
// live in ruleset.rs.

use macroquad::prelude::Color;

// Simulation
pub const FIXED_DT: f32 = 1.0 / 60.0;

// Terrain
pub const TERRAIN_DENSITY: f32 = 0.2;

// Ants
pub const INITIAL_ANT_CAPACITY: usize = 256;
pub const GROWTH_PER_EVENT: f32 = 1.0;

// Arrow-key nudge distance, in multiples of ant speed.
pub const NUDGE_SCALE: f32 = 5.0;

// Speed slider range (Swarm ruleset).
pub const ANT_SPEED_MIN: f32 = 1.0;
pub const ANT_SPEED_MAX: f32 = 10.0;

// Colorblind-friendly recolor palette (Gallery ruleset).
pub const ANT_PALETTE: [Color; 4] = [
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(1.0, 1.0, 0.0, 1.0),
    Color::new(1.0, 0.0, 1.0, 1.0),
    Color::new(0.0, 1.0, 1.0, 1.0),
];

// Stats
pub const STATS_CAPACITY: usize = 1000;
pub const STATS_SAMPLE_INTERVAL: u32 = 10;
