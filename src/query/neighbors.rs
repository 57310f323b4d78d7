//! Neighbor lookups in fixed direction-table order
//!
//! Output order is exactly the direction-table order (right, left, up, down,
//! then the diagonals), not a spatial sort. Handy for pathfinding.

use crate::spatial::cell::{Cell, directions};
use crate::spatial::sample::TileSample;
use crate::store::GridStore;

/// Populated neighbors of a cell
///
/// Probes `cell + offset` for each direction-table offset: 4 orthogonal
/// offsets, plus 4 diagonal ones unless `orthogonal_only` is set. Unpopulated
/// neighbors are skipped, so the result holds at most 4 or 8 samples and may
/// be empty. The probed cells keep the layer of `cell`.
pub fn neighbor_tiles<G: GridStore>(
    grid: &G,
    cell: Cell,
    orthogonal_only: bool,
) -> Vec<TileSample<G::Tile, G::Visual>> {
    directions(orthogonal_only)
        .filter_map(|direction| TileSample::probe(grid, cell + direction))
        .collect()
}
