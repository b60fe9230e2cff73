use std::collections::VecDeque;

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::ruleset::{Recolor, Ruleset};

/// A walker. Spawned by clicks, removed when it reaches the target.
#[derive(Clone, Debug)]
pub struct Ant {
    pub pos: Vec2,
    /// Circle radius. Grows on consumption/collision events.
    pub size: f32,
    pub color: Color,
    pub speed: f32,
    /// Trailing path, newest last. Bounded by the ruleset's path length.
    pub path: VecDeque<Vec2>,
    /// Marked on arrival at the target, swept at the end of the tick.
    pub exited: bool,
}

impl Ant {
    pub fn new(pos: Vec2, ruleset: &Ruleset) -> Self {
        Self {
            pos,
            size: ruleset.start_size,
            color: BLACK,
            speed: ruleset.start_speed,
            path: VecDeque::new(),
            exited: false,
        }
    }

    /// Append the current position to the trail, evicting the oldest point
    /// once the trail exceeds `max_len`.
    pub fn record_step(&mut self, max_len: usize) {
        self.path.push_back(self.pos);
        while self.path.len() > max_len {
            self.path.pop_front();
        }
    }

    pub fn grow(&mut self, ruleset: &Ruleset) {
        self.size = ruleset.clamp_size(self.size + config::GROWTH_PER_EVENT);
    }

    pub fn recolor(&mut self, scheme: Recolor, rng: &mut impl Rng) {
        match scheme {
            Recolor::Never => {}
            Recolor::RandomRgb => {
                self.color = Color::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>(), 1.0);
            }
            Recolor::Palette => {
                self.color = config::ANT_PALETTE[rng.gen_range(0..config::ANT_PALETTE.len())];
            }
        }
    }
}

/// Slot-based ant storage with a free list. Arrivals are marked and swept
/// after the per-ant loop so indices stay stable within a tick.
pub struct AntArena {
    pub slots: Vec<Option<Ant>>,
    free_list: Vec<u32>,
    pub count: usize,
}

impl AntArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            free_list: (0..capacity as u32).rev().collect(),
            count: 0,
        }
    }

    pub fn spawn(&mut self, ant: Ant) -> usize {
        if let Some(index) = self.free_list.pop() {
            let idx = index as usize;
            self.slots[idx] = Some(ant);
            self.count += 1;
            idx
        } else {
            self.slots.push(Some(ant));
            self.count += 1;
            self.slots.len() - 1
        }
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Ant> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut_by_index(&mut self, index: usize) -> Option<&mut Ant> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    /// Iterate over (index, &Ant) for ants that have not exited.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &Ant)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref()
                .and_then(|a| if a.exited { None } else { Some((i, a)) })
        })
    }

    /// Remove exited ants and reclaim their slots. Returns how many left.
    pub fn sweep_exited(&mut self) -> usize {
        let mut swept = 0;
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let Some(ant) = slot {
                if ant.exited {
                    *slot = None;
                    self.free_list.push(idx as u32);
                    self.count -= 1;
                    swept += 1;
                }
            }
        }
        swept
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::Variant;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn gallery() -> Ruleset {
        Ruleset::preset(Variant::Gallery)
    }

    #[test]
    fn trail_never_exceeds_path_length() {
        let rs = gallery();
        let mut ant = Ant::new(vec2(10.0, 10.0), &rs);
        for i in 0..100 {
            ant.pos = vec2(i as f32, i as f32);
            ant.record_step(rs.path_len);
            assert!(ant.path.len() <= rs.path_len);
        }
        assert_eq!(ant.path.len(), rs.path_len);
        // Newest point last, oldest evicted.
        assert_eq!(*ant.path.back().unwrap(), vec2(99.0, 99.0));
        assert_eq!(*ant.path.front().unwrap(), vec2(90.0, 90.0));
    }

    #[test]
    fn growth_respects_the_gluttony_cap() {
        let rs = Ruleset::preset(Variant::Gluttony);
        let mut ant = Ant::new(vec2(0.0, 0.0), &rs);
        for _ in 0..200 {
            let before = ant.size;
            ant.grow(&rs);
            assert!(ant.size >= before);
        }
        assert_eq!(ant.size, rs.max_size.unwrap());
    }

    #[test]
    fn palette_recolor_picks_from_the_palette() {
        let rs = gallery();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ant = Ant::new(vec2(0.0, 0.0), &rs);
        for _ in 0..20 {
            ant.recolor(Recolor::Palette, &mut rng);
            assert!(config::ANT_PALETTE.contains(&ant.color));
        }
    }

    #[test]
    fn never_recolor_keeps_the_spawn_color() {
        let rs = Ruleset::preset(Variant::Swarm);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ant = Ant::new(vec2(0.0, 0.0), &rs);
        ant.recolor(Recolor::Never, &mut rng);
        assert_eq!(ant.color, BLACK);
    }

    #[test]
    fn sweep_reclaims_slots_for_reuse() {
        let rs = gallery();
        let mut arena = AntArena::new(1);
        let idx = arena.spawn(Ant::new(vec2(0.0, 0.0), &rs));
        arena.get_mut_by_index(idx).unwrap().exited = true;

        assert_eq!(arena.sweep_exited(), 1);
        assert_eq!(arena.count, 0);

        let idx2 = arena.spawn(Ant::new(vec2(1.0, 1.0), &rs));
        assert_eq!(idx, idx2);
        assert_eq!(arena.capacity(), 1);
    }

    #[test]
    fn iter_live_skips_marked_ants() {
        let rs = gallery();
        let mut arena = AntArena::new(4);
        let a = arena.spawn(Ant::new(vec2(0.0, 0.0), &rs));
        let b = arena.spawn(Ant::new(vec2(1.0, 0.0), &rs));
        arena.get_mut_by_index(b).unwrap().exited = true;

        let live: Vec<usize> = arena.iter_live().map(|(i, _)| i).collect();
        assert_eq!(live, vec![a]);
    }
}
