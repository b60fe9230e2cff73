use macroquad::prelude::*;
use ::rand::Rng;

use crate::ant::AntArena;
use crate::collision;
use crate::config;
use crate::ruleset::Ruleset;
use crate::simulation::Target;
use crate::terrain::TerrainGrid;

fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}

fn arrived(pos: Vec2, size: f32, target: &Target) -> bool {
    pos.distance(target.pos) < size + target.radius
}

/// Whether a candidate position is a legal landing point.
fn accepts(candidate: Vec2, terrain: &TerrainGrid, ruleset: &Ruleset) -> bool {
    terrain.is_open(candidate) && (!ruleset.bounds_checked || ruleset.in_bounds(candidate))
}

/// One walk step for every live ant, in slot order. Per ant: propose a
/// random +/-1 step per axis scaled by speed, accept it only onto open
/// ground, then run arrival, terrain consumption, and ant-ant collision in
/// that order. A rejected step leaves the ant in place (Gluttony grows it
/// as a wall penalty). Arrivals are marked; the caller sweeps.
pub fn walk_ants(
    arena: &mut AntArena,
    terrain: &mut TerrainGrid,
    target: &Target,
    ruleset: &Ruleset,
    rng: &mut impl Rng,
) {
    for index in 0..arena.capacity() {
        let (pos, size, speed, path_empty) = match arena.get_by_index(index) {
            Some(a) if !a.exited => (a.pos, a.size, a.speed, a.path.is_empty()),
            _ => continue,
        };

        if path_empty {
            if let Some(ant) = arena.get_mut_by_index(index) {
                ant.record_step(ruleset.path_len);
            }
        }

        let step = vec2(random_sign(rng), random_sign(rng)) * speed * ruleset.step_scale;
        let candidate = pos + step;

        if !accepts(candidate, terrain, ruleset) {
            if ruleset.wall_penalty {
                if let Some(ant) = arena.get_mut_by_index(index) {
                    ant.grow(ruleset);
                }
            }
            continue;
        }

        let mut exited = false;
        if let Some(ant) = arena.get_mut_by_index(index) {
            ant.pos = candidate;
            ant.record_step(ruleset.path_len);

            if arrived(ant.pos, ant.size, target) {
                ant.exited = true;
                exited = true;
            } else if ruleset.tiles_edible {
                let eaten = terrain.consume_overlapping(ant.pos, size);
                for _ in 0..eaten {
                    ant.grow(ruleset);
                    ant.recolor(ruleset.recolor, rng);
                }
            }
        }

        if !exited && ruleset.ant_collisions {
            collision::resolve_for(index, arena, terrain, ruleset, rng);
        }
    }
}

/// Arrow-key pass (Swarm): push every ant a fixed distance in one direction
/// through the same acceptance, trail, and arrival rules as a walk step.
pub fn nudge_all(
    arena: &mut AntArena,
    terrain: &TerrainGrid,
    target: &Target,
    ruleset: &Ruleset,
    direction: Vec2,
) {
    for index in 0..arena.capacity() {
        let (pos, speed) = match arena.get_by_index(index) {
            Some(a) if !a.exited => (a.pos, a.speed),
            _ => continue,
        };

        let candidate = pos + direction * speed * config::NUDGE_SCALE;
        if !accepts(candidate, terrain, ruleset) {
            continue;
        }

        if let Some(ant) = arena.get_mut_by_index(index) {
            ant.pos = candidate;
            ant.record_step(ruleset.path_len);
            if arrived(ant.pos, ant.size, target) {
                ant.exited = true;
            }
        }
    }
}
