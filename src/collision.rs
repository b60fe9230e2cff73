use macroquad::prelude::*;
use ::rand::Rng;

use crate::ant::AntArena;
use crate::ruleset::Ruleset;
use crate::terrain::TerrainGrid;

/// Resolve ant-ant contacts for the ant that just moved, against every other
/// live ant. Both parties recolor and get pushed apart along the collision
/// angle by their own speeds; position updates land immediately, so later
/// pairs in the same sweep see them. Gluttony additionally seeds a tile at
/// the pair midpoint; Gallery grows the moving ant.
pub fn resolve_for(
    index: usize,
    arena: &mut AntArena,
    terrain: &mut TerrainGrid,
    ruleset: &Ruleset,
    rng: &mut impl Rng,
) {
    for other_index in 0..arena.capacity() {
        if other_index == index {
            continue;
        }

        let (cur_pos, cur_size, cur_speed) = match arena.get_by_index(index) {
            Some(a) if !a.exited => (a.pos, a.size, a.speed),
            _ => return,
        };
        let (other_pos, other_size, other_speed) = match arena.get_by_index(other_index) {
            Some(a) if !a.exited => (a.pos, a.size, a.speed),
            _ => continue,
        };

        let delta = cur_pos - other_pos;
        if delta.length() >= cur_size + other_size {
            continue;
        }

        let angle = delta.y.atan2(delta.x);
        let push = vec2(angle.cos(), angle.sin());

        if let Some(cur) = arena.get_mut_by_index(index) {
            if ruleset.grow_on_ant_collision {
                cur.grow(ruleset);
            }
            cur.recolor(ruleset.recolor, rng);
            cur.pos += push * cur_speed;
        }
        if let Some(other) = arena.get_mut_by_index(other_index) {
            other.recolor(ruleset.recolor, rng);
            other.pos -= push * other_speed;
        }

        if ruleset.spawn_tile_on_collision {
            let midpoint = match (arena.get_by_index(index), arena.get_by_index(other_index)) {
                (Some(a), Some(b)) => (a.pos + b.pos) * 0.5,
                _ => continue,
            };
            terrain.spawn_tile(midpoint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::Ant;
    use crate::ruleset::Variant;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn empty_terrain(grid_size: f32) -> TerrainGrid {
        TerrainGrid {
            tiles: Vec::new(),
            grid_size,
        }
    }

    fn arena_with_pair(ruleset: &Ruleset, a: Vec2, b: Vec2) -> AntArena {
        let mut arena = AntArena::new(4);
        arena.spawn(Ant::new(a, ruleset));
        arena.spawn(Ant::new(b, ruleset));
        arena
    }

    #[test]
    fn overlapping_pair_is_pushed_apart_along_the_collision_angle() {
        let rs = Ruleset::preset(Variant::Gallery);
        // Horizontal overlap: sizes 5 + 5 > distance 4.
        let mut arena = arena_with_pair(&rs, vec2(104.0, 100.0), vec2(100.0, 100.0));
        let mut terrain = empty_terrain(rs.grid_size);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        resolve_for(0, &mut arena, &mut terrain, &rs, &mut rng);

        let cur = arena.get_by_index(0).unwrap();
        let other = arena.get_by_index(1).unwrap();
        // angle = atan2(0, 4) = 0: mover pushed +x by its speed, other -x.
        assert!((cur.pos.x - 105.0).abs() < 1e-4);
        assert!((other.pos.x - 99.0).abs() < 1e-4);
        assert_eq!(cur.pos.y, 100.0);
        assert_eq!(other.pos.y, 100.0);
    }

    #[test]
    fn gallery_grows_only_the_moving_ant() {
        let rs = Ruleset::preset(Variant::Gallery);
        let mut arena = arena_with_pair(&rs, vec2(104.0, 100.0), vec2(100.0, 100.0));
        let mut terrain = empty_terrain(rs.grid_size);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        resolve_for(0, &mut arena, &mut terrain, &rs, &mut rng);

        assert_eq!(arena.get_by_index(0).unwrap().size, rs.start_size + 1.0);
        assert_eq!(arena.get_by_index(1).unwrap().size, rs.start_size);
        assert!(terrain.tiles.is_empty());
    }

    #[test]
    fn gluttony_seeds_a_tile_at_the_pair_midpoint() {
        let rs = Ruleset::preset(Variant::Gluttony);
        let mut arena = arena_with_pair(&rs, vec2(102.0, 100.0), vec2(100.0, 100.0));
        let mut terrain = empty_terrain(rs.grid_size);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        resolve_for(0, &mut arena, &mut terrain, &rs, &mut rng);

        assert_eq!(terrain.tiles.len(), 1);
        let cur = arena.get_by_index(0).unwrap();
        let other = arena.get_by_index(1).unwrap();
        let midpoint = (cur.pos + other.pos) * 0.5;
        assert_eq!(terrain.tiles[0].pos, midpoint);
        // Gluttony does not grow on ant contact.
        assert_eq!(cur.size, rs.start_size);
    }

    #[test]
    fn separated_ants_are_untouched() {
        let rs = Ruleset::preset(Variant::Gallery);
        let mut arena = arena_with_pair(&rs, vec2(100.0, 100.0), vec2(200.0, 200.0));
        let mut terrain = empty_terrain(rs.grid_size);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        resolve_for(0, &mut arena, &mut terrain, &rs, &mut rng);

        assert_eq!(arena.get_by_index(0).unwrap().pos, vec2(100.0, 100.0));
        assert_eq!(arena.get_by_index(1).unwrap().pos, vec2(200.0, 200.0));
    }

    #[test]
    fn exited_ants_do_not_participate() {
        let rs = Ruleset::preset(Variant::Gallery);
        let mut arena = arena_with_pair(&rs, vec2(104.0, 100.0), vec2(100.0, 100.0));
        arena.get_mut_by_index(1).unwrap().exited = true;
        let mut terrain = empty_terrain(rs.grid_size);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        resolve_for(0, &mut arena, &mut terrain, &rs, &mut rng);

        assert_eq!(arena.get_by_index(0).unwrap().pos, vec2(104.0, 100.0));
        assert_eq!(arena.get_by_index(0).unwrap().size, rs.start_size);
    }
}
