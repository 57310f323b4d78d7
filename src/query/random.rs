//! Uniform random selection over populated candidates
//!
//! The caller supplies the random source, so deterministic callers can seed
//! a `StdRng` and replay selections. Selection is uniform over the candidate
//! list; an empty candidate list is rejected rather than sampled.

use rand::Rng;

use crate::error::{Result, empty_grid};
use crate::query::enumerate::{all_tiles, bounded_cell_count};
use crate::query::neighbors::neighbor_tiles;
use crate::spatial::cell::Cell;
use crate::spatial::sample::TileSample;
use crate::store::GridStore;

/// Select one populated cell of the grid uniformly at random
///
/// Materializes the full enumeration before picking, so cost is proportional
/// to the grid's bounded area.
///
/// # Errors
///
/// Returns [`QueryError::EmptyGrid`](crate::QueryError::EmptyGrid) when the
/// grid has no populated cell.
pub fn random_tile<G, R>(grid: &G, rng: &mut R) -> Result<TileSample<G::Tile, G::Visual>>
where
    G: GridStore,
    R: Rng + ?Sized,
{
    let candidates: Vec<TileSample<G::Tile, G::Visual>> = all_tiles(grid).collect();
    pick(candidates, rng, "random_tile", || bounded_cell_count(grid))
}

/// Select one populated neighbor of a cell uniformly at random
///
/// Candidates are the same list [`neighbor_tiles`] reports for the cell.
///
/// # Errors
///
/// Returns [`QueryError::EmptyGrid`](crate::QueryError::EmptyGrid) when no
/// neighbor is populated.
pub fn random_neighbor_tile<G, R>(
    grid: &G,
    cell: Cell,
    orthogonal_only: bool,
    rng: &mut R,
) -> Result<TileSample<G::Tile, G::Visual>>
where
    G: GridStore,
    R: Rng + ?Sized,
{
    let candidates = neighbor_tiles(grid, cell, orthogonal_only);
    let scanned = if orthogonal_only { 4 } else { 8 };
    pick(candidates, rng, "random_neighbor_tile", || scanned)
}

/// Uniform pick from a candidate list, rejecting the empty case
fn pick<S, R, F>(
    mut candidates: Vec<S>,
    rng: &mut R,
    operation: &'static str,
    cells_scanned: F,
) -> Result<S>
where
    R: Rng + ?Sized,
    F: FnOnce() -> usize,
{
    if candidates.is_empty() {
        return Err(empty_grid(operation, cells_scanned()));
    }

    let index = rng.random_range(0..candidates.len());
    Ok(candidates.swap_remove(index))
}
