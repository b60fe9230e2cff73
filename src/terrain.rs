use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;

/// One square obstacle tile. Grid-aligned at generation time; tiles seeded
/// by ant collisions can sit anywhere.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Top-left corner.
    pub pos: Vec2,
    pub eaten: bool,
}

/// The obstacle field. Tiles block movement until eaten.
pub struct TerrainGrid {
    pub tiles: Vec<Tile>,
    pub grid_size: f32,
}

impl TerrainGrid {
    /// Roll each grid cell independently at the configured density.
    pub fn generate(canvas_w: f32, canvas_h: f32, grid_size: f32, rng: &mut impl Rng) -> Self {
        let cols = (canvas_w / grid_size).ceil() as usize;
        let rows = (canvas_h / grid_size).ceil() as usize;
        let mut tiles = Vec::new();

        for x in 0..cols {
            for y in 0..rows {
                if rng.gen::<f32>() < config::TERRAIN_DENSITY {
                    tiles.push(Tile {
                        pos: vec2(x as f32 * grid_size, y as f32 * grid_size),
                        eaten: false,
                    });
                }
            }
        }

        Self { tiles, grid_size }
    }

    /// True if the point lies inside no live tile. Walk steps are only
    /// accepted at open points.
    pub fn is_open(&self, pos: Vec2) -> bool {
        !self.tiles.iter().any(|tile| {
            !tile.eaten
                && pos.x >= tile.pos.x
                && pos.x < tile.pos.x + self.grid_size
                && pos.y >= tile.pos.y
                && pos.y < tile.pos.y + self.grid_size
        })
    }

    /// Mark every live tile overlapping the centered box around `pos` as
    /// eaten. Returns how many were consumed.
    pub fn consume_overlapping(&mut self, pos: Vec2, half_extent: f32) -> usize {
        let left = pos.x - half_extent;
        let right = pos.x + half_extent;
        let top = pos.y - half_extent;
        let bottom = pos.y + half_extent;

        let mut eaten = 0;
        for tile in &mut self.tiles {
            if tile.eaten {
                continue;
            }
            if right >= tile.pos.x
                && left <= tile.pos.x + self.grid_size
                && bottom >= tile.pos.y
                && top <= tile.pos.y + self.grid_size
            {
                tile.eaten = true;
                eaten += 1;
            }
        }
        eaten
    }

    /// Seed a fresh tile (Gluttony: at ant-collision midpoints).
    pub fn spawn_tile(&mut self, pos: Vec2) {
        self.tiles.push(Tile { pos, eaten: false });
    }

    pub fn live_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.eaten).count()
    }
}

/// Draw live tiles. Eaten tiles leave open floor behind.
pub fn draw_terrain(terrain: &TerrainGrid, color: Color) {
    for tile in &terrain.tiles {
        if !tile.eaten {
            draw_rectangle(
                tile.pos.x,
                tile.pos.y,
                terrain.grid_size,
                terrain.grid_size,
                color,
            );
        }
    }
}
