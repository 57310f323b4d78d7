//! Scene-object probes at a cell's world position
//!
//! Bridges tile space and world space: the cell is world-centered through
//! the grid, then a small circle query against the spatial index finds the
//! objects sitting on the tile. The probe radius assumes roughly 1-unit
//! cells; hosts with other scales should pass their own radius.

use crate::spatial::cell::Cell;
use crate::store::{GridStore, SceneObject, SpatialIndex};

/// Probe radius in world units used by [`find_object_at_cell`]
///
/// Chosen for maps whose cells are about one world unit across, so the
/// circle stays well inside the probed tile.
pub const DEFAULT_PROBE_RADIUS: f32 = 0.1;

/// Predicate an object must satisfy to be returned by a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectMatcher<'a> {
    /// Match on the object's exact name
    Name(&'a str),
    /// Match on the object's exact tag
    Tag(&'a str),
}

impl ObjectMatcher<'_> {
    /// Test an object against the predicate
    pub fn matches(&self, object: &impl SceneObject) -> bool {
        match self {
            Self::Name(name) => object.name() == *name,
            Self::Tag(tag) => object.tag() == *tag,
        }
    }
}

/// Find the first matching object on a tile, using the default probe radius
///
/// Equivalent to [`find_object_at_cell_with_radius`] with
/// [`DEFAULT_PROBE_RADIUS`]. Returns `None` when nothing within the probe
/// circle matches.
pub fn find_object_at_cell<G, S>(
    grid: &G,
    index: &S,
    cell: Cell,
    matcher: ObjectMatcher<'_>,
) -> Option<S::Object>
where
    G: GridStore,
    S: SpatialIndex,
{
    find_object_at_cell_with_radius(grid, index, cell, matcher, DEFAULT_PROBE_RADIUS)
}

/// Find the first matching object on a tile with an explicit probe radius
///
/// The cell's world center is probed with a circle query; the first object
/// in the index's returned order that satisfies the matcher wins. No further
/// tie-break is applied, so result determinism is inherited from the index.
pub fn find_object_at_cell_with_radius<G, S>(
    grid: &G,
    index: &S,
    cell: Cell,
    matcher: ObjectMatcher<'_>,
    radius: f32,
) -> Option<S::Object>
where
    G: GridStore,
    S: SpatialIndex,
{
    let center = grid.cell_to_world_center(cell);
    index
        .query_circle(center, radius)
        .into_iter()
        .find(|object| matcher.matches(object))
}
