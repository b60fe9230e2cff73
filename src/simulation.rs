use macroquad::prelude::*;
use ::rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ant::{Ant, AntArena};
use crate::config;
use crate::movement;
use crate::ruleset::{Ruleset, Variant};
use crate::terrain::TerrainGrid;

/// The despawn point ants seek.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
}

pub struct SimState {
    pub arena: AntArena,
    pub terrain: TerrainGrid,
    pub target: Target,
    pub ruleset: Ruleset,
    pub rng: ChaCha8Rng,
    pub tick_count: u64,
    pub exited_total: u64,
    pub paused: bool,
    /// Global ant speed, driven by the Swarm slider. New ants spawn with it.
    pub ant_speed: f32,
}

impl SimState {
    pub fn new(variant: Variant, seed: u64) -> Self {
        let ruleset = Ruleset::preset(variant);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let terrain = TerrainGrid::generate(
            ruleset.canvas_width,
            ruleset.canvas_height,
            ruleset.grid_size,
            &mut rng,
        );
        let target = Target {
            pos: vec2(
                rng.gen_range(0.0..ruleset.canvas_width).floor(),
                rng.gen_range(0.0..ruleset.canvas_height).floor(),
            ),
            radius: ruleset.target_radius,
        };
        let ant_speed = ruleset.start_speed;

        Self {
            arena: AntArena::new(config::INITIAL_ANT_CAPACITY),
            terrain,
            target,
            ruleset,
            rng,
            tick_count: 0,
            exited_total: 0,
            paused: false,
            ant_speed,
        }
    }

    /// One fixed step: walk every ant, then sweep arrivals.
    pub fn tick(&mut self) {
        movement::walk_ants(
            &mut self.arena,
            &mut self.terrain,
            &self.target,
            &self.ruleset,
            &mut self.rng,
        );
        self.exited_total += self.arena.sweep_exited() as u64;
        self.tick_count += 1;
    }

    /// Click handler. Spawns the ruleset's batch if the point is on open
    /// ground inside the canvas. Returns how many ants were created.
    pub fn spawn_ants_at(&mut self, pos: Vec2) -> usize {
        if !self.ruleset.in_bounds(pos) || !self.terrain.is_open(pos) {
            return 0;
        }
        for _ in 0..self.ruleset.spawn_per_click {
            let mut ant = Ant::new(pos, &self.ruleset);
            ant.speed = self.ant_speed;
            self.arena.spawn(ant);
        }
        self.ruleset.spawn_per_click
    }

    /// Slider handler. Applies to every live ant immediately.
    pub fn set_ant_speed(&mut self, speed: f32) {
        self.ant_speed = speed;
        for slot in self.arena.slots.iter_mut() {
            if let Some(ant) = slot {
                ant.speed = speed;
            }
        }
    }

    /// Arrow-key handler. Only the Swarm ruleset listens.
    pub fn nudge(&mut self, direction: Vec2) {
        if !self.ruleset.arrow_keys {
            return;
        }
        movement::nudge_all(
            &mut self.arena,
            &self.terrain,
            &self.target,
            &self.ruleset,
            direction,
        );
        self.exited_total += self.arena.sweep_exited() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_places_the_target_on_canvas() {
        for variant in Variant::ALL {
            let sim = SimState::new(variant, 42);
            assert!(sim.ruleset.in_bounds(sim.target.pos));
            assert_eq!(sim.target.radius, sim.ruleset.target_radius);
            assert!(!sim.terrain.tiles.is_empty());
        }
    }

    #[test]
    fn click_spawns_the_ruleset_batch_on_open_ground() {
        let mut sim = SimState::new(Variant::Swarm, 7);
        let mut open = None;
        for x in 0..(sim.ruleset.canvas_width as u32) {
            let pos = vec2(x as f32 + 0.5, 350.5);
            if sim.terrain.is_open(pos) {
                open = Some(pos);
                break;
            }
        }
        let pos = open.expect("a fifth of cells are tiles; a row has open ground");

        assert_eq!(sim.spawn_ants_at(pos), 10);
        assert_eq!(sim.arena.count, 10);
    }

    #[test]
    fn click_on_a_tile_or_off_canvas_spawns_nothing() {
        let mut sim = SimState::new(Variant::Gallery, 3);
        let tile_pos = sim.terrain.tiles[0].pos + vec2(1.0, 1.0);
        assert_eq!(sim.spawn_ants_at(tile_pos), 0);
        assert_eq!(sim.spawn_ants_at(vec2(-5.0, 10.0)), 0);
        assert_eq!(sim.arena.count, 0);
    }

    #[test]
    fn slider_speed_applies_to_live_and_future_ants() {
        let mut sim = SimState::new(Variant::Swarm, 7);
        sim.terrain.tiles.clear();
        sim.spawn_ants_at(vec2(100.0, 100.0));
        sim.set_ant_speed(4.0);

        for (_, ant) in sim.arena.iter_live() {
            assert_eq!(ant.speed, 4.0);
        }
        sim.spawn_ants_at(vec2(200.0, 200.0));
        assert!(sim.arena.iter_live().all(|(_, a)| a.speed == 4.0));
    }

    #[test]
    fn arrivals_are_swept_and_counted() {
        let mut sim = SimState::new(Variant::Gallery, 9);
        sim.terrain.tiles.clear();
        let next_to_target = sim.target.pos + vec2(1.0, 0.0);
        sim.arena.spawn(Ant::new(next_to_target, &sim.ruleset));

        sim.tick();
        assert_eq!(sim.exited_total, 1);
        assert_eq!(sim.arena.count, 0);
        assert_eq!(sim.tick_count, 1);
    }

    #[test]
    fn nudges_are_ignored_outside_the_swarm_ruleset() {
        let mut sim = SimState::new(Variant::Gallery, 5);
        sim.terrain.tiles.clear();
        sim.target.pos = vec2(-1000.0, -1000.0);
        sim.arena.spawn(Ant::new(vec2(100.0, 100.0), &sim.ruleset));

        sim.nudge(vec2(1.0, 0.0));
        let (_, ant) = sim.arena.iter_live().next().expect("ant is live");
        assert_eq!(ant.pos, vec2(100.0, 100.0));
    }

    #[test]
    fn nudges_move_the_swarm() {
        let mut sim = SimState::new(Variant::Swarm, 5);
        sim.terrain.tiles.clear();
        sim.target.pos = vec2(-1000.0, -1000.0);
        sim.arena.spawn(Ant::new(vec2(100.0, 100.0), &sim.ruleset));

        sim.nudge(vec2(0.0, 1.0));
        let (_, ant) = sim.arena.iter_live().next().expect("ant is live");
        assert_eq!(ant.pos, vec2(100.0, 105.0));
    }

    #[test]
    fn same_seed_reproduces_the_world() {
        let a = SimState::new(Variant::Gluttony, 1234);
        let b = SimState::new(Variant::Gluttony, 1234);
        assert_eq!(a.target.pos, b.target.pos);
        assert_eq!(a.terrain.tiles.len(), b.terrain.tiles.len());
        for (ta, tb) in a.terrain.tiles.iter().zip(&b.terrain.tiles) {
            assert_eq!(ta.pos, tb.pos);
        }
    }
}
