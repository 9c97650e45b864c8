//! Tile grid for collision lookups.
//!
//! Each cell optionally refers to a tile entity living in the [`Scene`]. The
//! tile entity carries its own Transform/solid flag, so bricks can also be
//! breakable and receive contact tags like any other entity.
//!
//! [`Scene`]: crate::core::scene::Scene

use crate::api::types::EntityId;

/// Grid of tile entity ids, row-major: index = y * width + x.
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Width of the map in tiles.
    pub width: u32,
    /// Height of the map in tiles.
    pub height: u32,
    cells: Vec<Option<EntityId>>,
}

impl TileMap {
    /// Create a new empty tile map.
    pub fn new(width: u32, height: u32) -> Self {
        let count = (width * height) as usize;
        Self {
            width,
            height,
            cells: vec![None; count],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Tile entity at grid cell (x, y). Negative or out-of-range cells are empty.
    pub fn get(&self, x: i32, y: i32) -> Option<EntityId> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    /// Set the tile at grid cell (x, y). Out-of-range writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, tile: Option<EntityId>) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = tile;
        }
    }

    /// Grid cell containing the world point (px, py).
    pub fn cell_at(px: f32, py: f32, tile_size: f32) -> (i32, i32) {
        ((px / tile_size).floor() as i32, (py / tile_size).floor() as i32)
    }

    /// Count of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over occupied cells as (x, y, id).
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, EntityId)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|id| ((i % width) as i32, (i / width) as i32, id))
        })
    }
}
