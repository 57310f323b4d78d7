//! Spatial value types shared by every query
//!
//! This module contains the plain data the queries traffic in:
//! - Integer cell coordinates and the fixed neighbor direction tables
//! - World-space points for the cell/world mapping
//! - Populated-cell samples returned by queries
//! - Capability tags for tile-type checks

/// Cell coordinates and neighbor direction tables
pub mod cell;
/// World-space point type
pub mod point;
/// Populated-cell sample construction
pub mod sample;
/// Capability tags for tile classification
pub mod tags;

pub use cell::Cell;
pub use point::WorldPoint;
pub use sample::TileSample;
pub use tags::{TagSet, Tagged, TileTag};
