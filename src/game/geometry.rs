//! Static Level Geometry
//!
//! Ordered tile collections for platforms and lava. Tiles are laid out in
//! horizontal runs with fixed spacing and never move after level setup;
//! per frame they only answer intersection queries.

use serde::{Deserialize, Serialize};

use crate::core::geom::{GeometryError, Rect};
use crate::core::vec2::Vec2;

/// An ordered collection of identically sized static tiles.
///
/// Query results preserve insertion order; the collision resolver depends
/// on that ordering when several tiles overlap the player at once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileField {
    tiles: Vec<Rect>,
    tile_w: f32,
    tile_h: f32,
}

impl TileField {
    /// Create an empty field of `tile_w` x `tile_h` tiles.
    pub fn new(tile_w: f32, tile_h: f32) -> Result<Self, GeometryError> {
        // Validate the tile size once so add_run cannot produce bad rects.
        Rect::new(0.0, 0.0, tile_w, tile_h)?;
        Ok(Self {
            tiles: Vec::new(),
            tile_w,
            tile_h,
        })
    }

    /// Append a horizontal run of `count` tiles starting at `start`,
    /// spaced `spacing` units apart.
    pub fn add_run(&mut self, count: u32, start: Vec2, spacing: f32) {
        for i in 0..count {
            let x = start.x + i as f32 * spacing;
            self.tiles.push(Rect {
                x,
                y: start.y,
                w: self.tile_w,
                h: self.tile_h,
            });
        }
    }

    /// All tiles intersecting `bounds`, in insertion order.
    pub fn overlapping(&self, bounds: &Rect) -> Vec<Rect> {
        self.tiles
            .iter()
            .filter(|tile| bounds.intersects(tile))
            .copied()
            .collect()
    }

    /// Whether any tile intersects `bounds`.
    pub fn any_overlap(&self, bounds: &Rect) -> bool {
        self.tiles.iter().any(|tile| bounds.intersects(tile))
    }

    /// All tiles in the field.
    pub fn rects(&self) -> &[Rect] {
        &self.tiles
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the field holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
