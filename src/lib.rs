//! Read-only query helpers layered over a grid-based tile map
//!
//! The host environment owns tile storage and collision data; this crate only
//! asks questions of it. Stores are injected through the [`store::GridStore`]
//! and [`store::SpatialIndex`] traits, and every query is a single synchronous
//! pass with no retained state.

#![forbid(unsafe_code)]

/// Error types for query operations
pub mod error;
/// Query functions: enumeration, sampling, neighbors, ranges, probes
pub mod query;
/// Spatial value types: cells, world points, samples, capability tags
pub mod spatial;
/// Collaborator traits and in-memory store implementations
pub mod store;

pub use error::{QueryError, Result};
