//! Capability tags for tile classification
//!
//! Tile-type checks are expressed as set membership: each tile advertises a
//! fixed-capacity set of capability tags, and a query asks whether a given
//! tag is present. This replaces runtime type dispatch with plain data.

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Capability tag identifier
///
/// Tags are 1-based indices into a host-defined capability vocabulary;
/// index 0 is reserved and never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileTag(pub usize);

/// Fixed-capacity capability set carried by a tile
///
/// Provides O(1) membership testing. Capacity is the size of the host's
/// capability vocabulary, fixed when the set is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSet {
    bits: BitVec,
    max_tags: usize,
}

impl TagSet {
    /// Create a set with no tags present
    pub fn new(max_tags: usize) -> Self {
        Self {
            bits: bitvec![0; max_tags],
            max_tags,
        }
    }

    /// Create a set containing every tag in the vocabulary
    pub fn all(max_tags: usize) -> Self {
        Self {
            bits: bitvec![1; max_tags],
            max_tags,
        }
    }

    /// Build a set from a list of tags
    pub fn from_tags(tags: &[TileTag], max_tags: usize) -> Self {
        let mut set = Self::new(max_tags);
        for &tag in tags {
            set.insert(tag);
        }
        set
    }

    /// Insert a tag
    ///
    /// Takes 1-based tag indices, storing at index-1 internally. Out-of-range
    /// tags are ignored.
    pub fn insert(&mut self, tag: TileTag) {
        if tag.0 > 0 && tag.0 <= self.max_tags {
            self.bits.set(tag.0 - 1, true);
        }
    }

    /// Test tag membership
    pub fn contains(&self, tag: TileTag) -> bool {
        if tag.0 > 0 {
            self.bits.get(tag.0 - 1).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Test if no tags are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tags in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all tags as a vector
    ///
    /// Returns 1-based indices in ascending order
    pub fn to_vec(&self) -> Vec<TileTag> {
        self.bits.iter_ones().map(|index| TileTag(index + 1)).collect()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<usize> = self.bits.iter_ones().map(|index| index + 1).collect();
        write!(f, "TagSet({} tags: {indices:?})", self.count())
    }
}

/// Tiles that advertise capability tags
pub trait Tagged {
    /// Capability set of this tile
    fn tags(&self) -> &TagSet;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let mut set = TagSet::new(8);
        set.insert(TileTag(2));
        set.insert(TileTag(5));

        assert!(set.contains(TileTag(2)));
        assert!(set.contains(TileTag(5)));
        assert!(!set.contains(TileTag(3)));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_reserved_and_out_of_range_tags() {
        let mut set = TagSet::all(4);
        assert!(!set.contains(TileTag(0)));
        assert!(!set.contains(TileTag(5)));

        set.insert(TileTag(0));
        set.insert(TileTag(99));
        assert_eq!(set.count(), 4);
    }

    #[test]
    fn test_from_tags_round_trip() {
        let set = TagSet::from_tags(&[TileTag(1), TileTag(3)], 4);
        assert_eq!(set.to_vec(), vec![TileTag(1), TileTag(3)]);
        assert!(!set.is_empty());
    }
}
