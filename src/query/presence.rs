//! Tile presence checks in cell and world space
//!
//! Presence here means a tile handle exists; a visual alone does not count,
//! even though enumeration and neighbor queries treat visual-only cells as
//! populated. The asymmetry is deliberate and preserved.

use crate::spatial::cell::Cell;
use crate::spatial::point::WorldPoint;
use crate::store::GridStore;

/// Test whether a cell holds a tile handle
pub fn has_tile<G: GridStore>(grid: &G, cell: Cell) -> bool {
    grid.tile_at(cell).is_some()
}

/// Test whether the cell containing a world point holds a tile handle
///
/// The point is resolved to a cell through the grid's world mapping first.
pub fn has_tile_at_world<G: GridStore>(grid: &G, point: WorldPoint) -> bool {
    has_tile(grid, grid.world_to_cell(point))
}
