//! Query functions over an injected grid store
//!
//! Every function here is a single synchronous read-only pass: it borrows
//! the store for the duration of the call, walks cells or neighbor offsets,
//! and returns fresh [`TileSample`](crate::spatial::TileSample) values.
//! Nothing is cached between calls.

/// Full-grid enumeration of populated cells
pub mod enumerate;
/// Neighbor lookups in fixed direction-table order
pub mod neighbors;
/// Scene-object probes at a cell's world position
pub mod objects;
/// Tile presence checks in cell and world space
pub mod presence;
/// Uniform random selection over populated candidates
pub mod random;
/// Square range scans around a center cell
pub mod range;
/// Capability-tag checks on tiles
pub mod typed;

pub use enumerate::{AllTiles, all_tiles};
pub use neighbors::neighbor_tiles;
pub use objects::{DEFAULT_PROBE_RADIUS, ObjectMatcher, find_object_at_cell,
    find_object_at_cell_with_radius};
pub use presence::{has_tile, has_tile_at_world};
pub use random::{random_neighbor_tile, random_tile};
pub use range::tiles_in_range;
pub use typed::tile_has_tag;
