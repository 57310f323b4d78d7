//! Populated-cell samples returned by queries
//!
//! A sample is a fresh value capturing what a single cell held at lookup
//! time. Samples are only ever built through [`TileSample::probe`], which is
//! where the populated-cell invariant lives: a cell with neither tile nor
//! visual never yields a sample.

use crate::spatial::cell::Cell;
use crate::store::GridStore;

/// Read-only result of a grid lookup at one cell
///
/// Generic over the store's tile and visual handle types. At least one of
/// `tile` and `visual` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSample<T, V> {
    /// Column coordinate of the sampled cell
    pub x: i32,
    /// Row coordinate of the sampled cell
    pub y: i32,
    /// Logical tile content, if any
    pub tile: Option<T>,
    /// Rendered visual content, if any
    pub visual: Option<V>,
}

impl<T, V> TileSample<T, V> {
    /// Sample a cell, yielding `None` when it is unpopulated
    ///
    /// This is the single constructor for samples; every query funnels
    /// through it so empty cells are filtered in one place.
    pub fn probe<G>(grid: &G, cell: Cell) -> Option<Self>
    where
        G: GridStore<Tile = T, Visual = V>,
    {
        let tile = grid.tile_at(cell);
        let visual = grid.visual_at(cell);

        if tile.is_none() && visual.is_none() {
            return None;
        }

        Some(Self {
            x: cell.x,
            y: cell.y,
            tile,
            visual,
        })
    }

    /// Planar position of the sampled cell, on layer zero
    pub const fn position(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    /// Whether the cell held a logical tile (not just a visual)
    pub const fn has_tile(&self) -> bool {
        self.tile.is_some()
    }
}
