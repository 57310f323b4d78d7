//! Full-grid enumeration of populated cells
//!
//! Walks every cell of the store's reported bounds in row-major order
//! (x outer, y inner) and yields a sample for each populated cell. The
//! iterator is lazy and borrows the grid; each call to [`all_tiles`] starts
//! a fresh scan of current grid state, not a snapshot.

use crate::spatial::cell::Cell;
use crate::spatial::sample::TileSample;
use crate::store::GridStore;

/// Lazy iterator over every populated cell of a grid
///
/// Produced by [`all_tiles`]. Cells where both tile and visual are absent
/// are skipped; an empty grid yields nothing.
#[derive(Debug)]
pub struct AllTiles<'a, G> {
    grid: &'a G,
    min: Cell,
    max: Cell,
    x: i32,
    y: i32,
}

impl<G: GridStore> Iterator for AllTiles<'_, G> {
    type Item = TileSample<G::Tile, G::Visual>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.x < self.max.x {
            if self.y >= self.max.y {
                self.y = self.min.y;
                self.x += 1;
                continue;
            }

            let cell = Cell::new(self.x, self.y);
            self.y += 1;

            if let Some(sample) = TileSample::probe(self.grid, cell) {
                return Some(sample);
            }
        }

        None
    }
}

/// Enumerate every populated cell within `[bounds_min, bounds_max)`
///
/// Scan order is x outer ascending, y inner ascending, matching the bounds
/// reported by the store (exclusive maximum on both axes).
pub fn all_tiles<G: GridStore>(grid: &G) -> AllTiles<'_, G> {
    let min = grid.bounds_min();
    let max = grid.bounds_max();

    AllTiles {
        grid,
        min,
        max,
        x: min.x,
        y: min.y,
    }
}

/// Number of cells inside the grid's reported bounds
///
/// Used to report how much was scanned when a selection finds nothing.
pub(crate) fn bounded_cell_count<G: GridStore>(grid: &G) -> usize {
    let min = grid.bounds_min();
    let max = grid.bounds_max();
    // Spans are computed in i64: bounds may sit anywhere in the i32 range
    let width = (i64::from(max.x) - i64::from(min.x)).max(0) as usize;
    let height = (i64::from(max.y) - i64::from(min.y)).max(0) as usize;
    width.saturating_mul(height)
}
