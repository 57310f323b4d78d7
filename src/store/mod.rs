//! Collaborator traits and in-memory store implementations
//!
//! The host environment owns the real tile map and collision data. Queries
//! reach it through two seams: [`GridStore`] for cell lookups and the
//! cell/world mapping, and [`SpatialIndex`] for circle probes against scene
//! objects. Both are injected per call; this crate never holds a store past
//! the duration of a single query.
//!
//! Two grid implementations ship with the crate so it is usable standalone:
//! a hash-backed [`SparseGrid`] for unbounded maps and an array-backed
//! [`DenseGrid`] for fixed windows.

use crate::spatial::cell::Cell;
use crate::spatial::point::WorldPoint;

/// Array-backed grid over a fixed window
pub mod dense;
/// Scene-object index with a linear-scan circle query
pub mod scene;
/// Hash-backed grid with tracked bounds
pub mod sparse;

pub use dense::DenseGrid;
pub use scene::{SceneHandle, StaticIndex};
pub use sparse::SparseGrid;

/// Two-dimensional sparse grid keyed by integer cell coordinates
///
/// All lookups are total: absent data reports `None`, and coordinates
/// outside the store's bounds simply read as unpopulated. Bounds are
/// inclusive on the minimum corner and exclusive on the maximum corner
/// of both axes.
pub trait GridStore {
    /// Logical tile handle stored per cell
    type Tile: Clone;
    /// Visual handle stored per cell, independent of the tile
    type Visual: Clone;

    /// Tile content at a cell, if any
    fn tile_at(&self, cell: Cell) -> Option<Self::Tile>;

    /// Visual content at a cell, if any
    fn visual_at(&self, cell: Cell) -> Option<Self::Visual>;

    /// Inclusive minimum corner of the populated region
    fn bounds_min(&self) -> Cell;

    /// Exclusive maximum corner of the populated region
    fn bounds_max(&self) -> Cell;

    /// World-space center of a cell
    fn cell_to_world_center(&self, cell: Cell) -> WorldPoint;

    /// Cell containing a world-space point
    fn world_to_cell(&self, point: WorldPoint) -> Cell;
}

/// Scene object exposing the attributes probes match on
pub trait SceneObject {
    /// Object name
    fn name(&self) -> &str;

    /// Object tag
    fn tag(&self) -> &str;
}

/// Point/shape query service over scene objects
///
/// The order of returned objects is whatever the index produces; probes take
/// the first match in that order, so hosts wanting deterministic results
/// must provide an index with a deterministic order.
pub trait SpatialIndex {
    /// Handle type for objects found by queries
    type Object: SceneObject;

    /// All objects within `radius` of `center`
    fn query_circle(&self, center: WorldPoint, radius: f32) -> Vec<Self::Object>;
}
