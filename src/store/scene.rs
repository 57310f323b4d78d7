//! Scene-object index with a linear-scan circle query
//!
//! A minimal [`SpatialIndex`] for hosts without a physics engine and for
//! exercising object probes in tests. Objects keep insertion order, so the
//! "first match" a probe returns is deterministic.

use crate::spatial::point::WorldPoint;
use crate::store::{SceneObject, SpatialIndex};

/// Named and tagged scene object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneHandle {
    /// Object name
    pub name: String,
    /// Object tag
    pub tag: String,
}

impl SceneHandle {
    /// Create a handle from name and tag
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }
}

impl SceneObject for SceneHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn tag(&self) -> &str {
        &self.tag
    }
}

/// Insertion-ordered object index
///
/// `query_circle` is a linear distance filter; adequate for small scenes and
/// for tests that need a predictable result order.
#[derive(Debug, Clone, Default)]
pub struct StaticIndex<O> {
    objects: Vec<(WorldPoint, O)>,
}

impl<O: Clone> StaticIndex<O> {
    /// Create an empty index
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Register an object at a world position
    pub fn insert(&mut self, position: WorldPoint, object: O) {
        self.objects.push((position, object));
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no object is registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<O: SceneObject + Clone> SpatialIndex for StaticIndex<O> {
    type Object = O;

    fn query_circle(&self, center: WorldPoint, radius: f32) -> Vec<O> {
        self.objects
            .iter()
            .filter(|(position, _)| position.distance(center) <= radius)
            .map(|(_, object)| object.clone())
            .collect()
    }
}
