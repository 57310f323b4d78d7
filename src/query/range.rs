//! Square range scans around a center cell
//!
//! The scanned region is a square of side `2 * range + 1` centered on the
//! query cell, not a diamond or a radius. The center's layer is carried
//! through to every probed cell.

use crate::error::{QueryError, Result};
use crate::spatial::cell::Cell;
use crate::spatial::sample::TileSample;
use crate::store::GridStore;

/// Populated cells within a square range of a center
///
/// Scans offsets `x, y` in `[-range, range]` inclusive on both axes, x outer
/// ascending then y inner ascending, starting at `(-range, -range)`. A range
/// of 0 yields at most the center cell itself.
///
/// # Errors
///
/// Returns [`QueryError::InvalidRange`] when `range` is negative.
pub fn tiles_in_range<G: GridStore>(
    grid: &G,
    center: Cell,
    range: i32,
) -> Result<Vec<TileSample<G::Tile, G::Visual>>> {
    if range < 0 {
        return Err(QueryError::InvalidRange { range });
    }

    let mut tiles = Vec::new();
    for dx in -range..=range {
        for dy in -range..=range {
            if let Some(sample) = TileSample::probe(grid, center.offset(dx, dy)) {
                tiles.push(sample);
            }
        }
    }

    Ok(tiles)
}
