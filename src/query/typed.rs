//! Capability-tag checks on tiles

use crate::spatial::cell::Cell;
use crate::spatial::tags::{Tagged, TileTag};
use crate::store::GridStore;

/// Test whether the tile at a cell carries a capability tag
///
/// True iff a tile exists at `cell` and its tag set contains `tag`. An
/// absent tile (including a visual-only cell) reports false, never an error.
pub fn tile_has_tag<G>(grid: &G, cell: Cell, tag: TileTag) -> bool
where
    G: GridStore,
    G::Tile: Tagged,
{
    grid.tile_at(cell)
        .is_some_and(|tile| tile.tags().contains(tag))
}
